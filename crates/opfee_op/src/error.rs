use opfee_eth::{Address, BlockPin};
use opfee_rpc_client::RpcClientError;

/// The category of an [`OracleError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller's options cannot be satisfied. Raised before any network
    /// call.
    Configuration,
    /// The runtime lacks the capability to fetch from the remote node.
    ///
    /// This includes endpoints with a valid URL whose scheme the HTTP
    /// transport cannot serve, e.g. `ws://` or `ipc://`. Such a client is
    /// still resolved, so its metadata remains usable, and every read fails.
    Environment,
    /// A request to the remote node failed.
    RemoteCall,
}

/// Failure of a single remote read.
#[derive(Debug, thiserror::Error)]
pub enum RemoteCallError {
    /// Transport or JSON-RPC failure, including reverts.
    #[error(transparent)]
    Rpc(#[from] RpcClientError),
    /// The returned data does not match the expected ABI type.
    #[error("Failed to decode return data: {0}")]
    Decode(#[from] alloy_sol_types::Error),
}

/// Errors that occur while resolving a chain client or reading from the
/// `GasPriceOracle`.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// No RPC URL is known for the chain and none was provided.
    #[error("Unknown chain id {chain_id}. Provide an RPC URL to connect to it.")]
    UnknownChain {
        /// The requested chain ID
        chain_id: u64,
    },
    /// The provided RPC URL cannot be parsed.
    #[error("Invalid RPC URL for chain {chain_id}: {source}")]
    InvalidRpcUrl {
        /// The requested chain ID
        chain_id: u64,
        /// The parse failure
        #[source]
        source: Box<RpcClientError>,
    },
    /// The L2 and L1 block pins of a fee estimate differ while strict pinning
    /// is enabled.
    #[error("Inconsistent block pins: the L2 estimate uses {l2:?} but the L1 fee uses {l1:?}")]
    InconsistentBlockPins {
        /// Pin of the L2 gas estimate
        l2: BlockPin,
        /// Pin of the L1 fee read
        l1: BlockPin,
    },
    /// The runtime cannot fetch from the chain's RPC endpoint.
    #[error("No fetch capability for chain {chain_id}: {reason}")]
    FetchUnavailable {
        /// The chain ID of the client
        chain_id: u64,
        /// Why fetching is unavailable
        reason: String,
    },
    /// A remote call failed.
    #[error("Call to `{method}` on chain {chain_id} failed: {source}")]
    RemoteCall {
        /// The method or function signature that was called
        method: &'static str,
        /// The called contract, if any
        address: Option<Address>,
        /// The chain ID of the client
        chain_id: u64,
        /// The underlying failure
        #[source]
        source: Box<RemoteCallError>,
    },
}

impl OracleError {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OracleError::UnknownChain { .. }
            | OracleError::InvalidRpcUrl { .. }
            | OracleError::InconsistentBlockPins { .. } => ErrorKind::Configuration,
            OracleError::FetchUnavailable { .. } => ErrorKind::Environment,
            OracleError::RemoteCall { .. } => ErrorKind::RemoteCall,
        }
    }

    /// Whether the error was raised before any network call because of the
    /// caller's options.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Whether the error was raised because the runtime cannot fetch.
    pub fn is_environment(&self) -> bool {
        self.kind() == ErrorKind::Environment
    }

    /// Whether a remote call failed.
    pub fn is_remote_call(&self) -> bool {
        self.kind() == ErrorKind::RemoteCall
    }
}
