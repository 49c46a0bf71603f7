use std::sync::Arc;

use opfee_eth::{Address, BlockPin, Bytes, CallParams, CallRequest, U256};
use opfee_rpc_client::RpcClient;

use crate::{
    chains::{ChainMetadata, NativeCurrency},
    error::{OracleError, RemoteCallError},
    request_methods::RequestMethod,
};

/// Selects the L2 chain to read from.
#[derive(Clone, Debug)]
pub enum ClientOptions {
    /// A chain from the known-chain table, using its default RPC endpoint.
    KnownChain {
        /// The chain ID
        chain_id: u64,
        /// Overrides the chain's native currency
        native_currency: Option<NativeCurrency>,
    },
    /// Any chain, using the provided RPC endpoint.
    RpcUrl {
        /// The chain ID
        chain_id: u64,
        /// The RPC endpoint
        rpc_url: String,
        /// Overrides the chain's native currency
        native_currency: Option<NativeCurrency>,
    },
    /// A previously resolved client, used as-is.
    Client(L2Client),
}

impl ClientOptions {
    /// Selects a known chain.
    pub fn known_chain(chain_id: u64) -> Self {
        ClientOptions::KnownChain {
            chain_id,
            native_currency: None,
        }
    }

    /// Selects a chain through an explicit RPC endpoint.
    pub fn with_rpc_url(chain_id: u64, rpc_url: impl Into<String>) -> Self {
        ClientOptions::RpcUrl {
            chain_id,
            rpc_url: rpc_url.into(),
            native_currency: None,
        }
    }

    /// Overrides the native currency of the chain. Has no effect on an
    /// already resolved client.
    pub fn with_native_currency(self, currency: NativeCurrency) -> Self {
        match self {
            ClientOptions::KnownChain { chain_id, .. } => ClientOptions::KnownChain {
                chain_id,
                native_currency: Some(currency),
            },
            ClientOptions::RpcUrl {
                chain_id, rpc_url, ..
            } => ClientOptions::RpcUrl {
                chain_id,
                rpc_url,
                native_currency: Some(currency),
            },
            ClientOptions::Client(client) => ClientOptions::Client(client),
        }
    }

    /// The selected chain ID.
    pub fn chain_id(&self) -> u64 {
        match self {
            ClientOptions::KnownChain { chain_id, .. } | ClientOptions::RpcUrl { chain_id, .. } => {
                *chain_id
            }
            ClientOptions::Client(client) => client.chain_id(),
        }
    }
}

impl From<L2Client> for ClientOptions {
    fn from(value: L2Client) -> Self {
        ClientOptions::Client(value)
    }
}

/// A read-only handle to an OP-stack L2 node.
///
/// Cloning is cheap; clones share the same HTTP client.
#[derive(Clone, Debug)]
pub struct L2Client {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    chain: ChainMetadata,
    /// `Err` holds the reason why the runtime cannot fetch from the endpoint.
    transport: Result<RpcClient<RequestMethod>, String>,
}

impl L2Client {
    /// Resolves a client for the selected chain.
    ///
    /// A [`ClientOptions::Client`] is returned unchanged. No network call is
    /// made. If the runtime cannot fetch from the resolved endpoint, a
    /// warning is logged and the returned client fails every read with an
    /// environment error.
    pub fn resolve(options: &ClientOptions) -> Result<Self, OracleError> {
        let (chain_id, rpc_url, native_currency) = match options {
            ClientOptions::Client(client) => return Ok(client.clone()),
            ClientOptions::KnownChain {
                chain_id,
                native_currency,
            } => (*chain_id, None, native_currency.clone()),
            ClientOptions::RpcUrl {
                chain_id,
                rpc_url,
                native_currency,
            } => (*chain_id, Some(rpc_url.as_str()), native_currency.clone()),
        };

        let chain = ChainMetadata::resolve(chain_id, rpc_url, native_currency)
            .ok_or(OracleError::UnknownChain { chain_id })?;

        Self::from_chain(chain)
    }

    /// Constructs a client for the provided chain metadata, connecting to its
    /// default RPC endpoint.
    pub fn from_chain(chain: ChainMetadata) -> Result<Self, OracleError> {
        let url = chain
            .default_rpc_url()
            .ok_or(OracleError::UnknownChain { chain_id: chain.id })?;

        let transport = match RpcClient::new(url) {
            Ok(client) => Ok(client),
            Err(error) if error.is_fetch_unavailable() => {
                // The URL is omitted as it may contain an API key
                log::warn!(
                    "Cannot fetch from the RPC endpoint of chain {} ({}): {error}. All reads will fail.",
                    chain.id,
                    chain.name
                );
                Err(error.to_string())
            }
            Err(source) => {
                return Err(OracleError::InvalidRpcUrl {
                    chain_id: chain.id,
                    source: Box::new(source),
                });
            }
        };

        Ok(Self {
            inner: Arc::new(Inner { chain, transport }),
        })
    }

    /// The metadata of the chain.
    pub fn chain(&self) -> &ChainMetadata {
        &self.inner.chain
    }

    /// The chain ID the client was resolved with.
    pub fn chain_id(&self) -> u64 {
        self.inner.chain.id
    }

    /// Whether the runtime can fetch from the chain's RPC endpoint.
    pub fn has_fetch_capability(&self) -> bool {
        self.inner.transport.is_ok()
    }

    /// Returns an environment error if the runtime cannot fetch from the
    /// chain's RPC endpoint.
    pub fn ensure_fetch_capability(&self) -> Result<(), OracleError> {
        self.rpc().map(|_rpc| ())
    }

    pub(crate) fn rpc(&self) -> Result<&RpcClient<RequestMethod>, OracleError> {
        self.inner
            .transport
            .as_ref()
            .map_err(|reason| OracleError::FetchUnavailable {
                chain_id: self.chain_id(),
                reason: reason.clone(),
            })
    }

    pub(crate) fn remote_call_error(
        &self,
        method: &'static str,
        address: Option<Address>,
        source: impl Into<RemoteCallError>,
    ) -> OracleError {
        OracleError::RemoteCall {
            method,
            address,
            chain_id: self.chain_id(),
            source: Box::new(source.into()),
        }
    }

    /// Estimates the L2 execution gas of a transaction using
    /// `eth_estimateGas`.
    ///
    /// The block argument is omitted for [`BlockPin::Unpinned`], letting the
    /// node choose its default.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn estimate_gas(
        &self,
        request: CallRequest,
        block: BlockPin,
    ) -> Result<U256, OracleError> {
        let rpc = self.rpc()?;
        let to = request.to;

        rpc.call::<U256>(RequestMethod::EstimateGas(CallParams::new(
            request,
            block.block_spec(),
        )))
        .await
        .map_err(|error| self.remote_call_error("eth_estimateGas", to, error))
    }

    /// Executes a message call without creating a transaction, returning its
    /// output. Failures are attributed to `method`.
    ///
    /// Unpinned calls are executed against the latest block.
    pub(crate) async fn call(
        &self,
        method: &'static str,
        request: CallRequest,
        block: BlockPin,
    ) -> Result<Bytes, OracleError> {
        let rpc = self.rpc()?;
        let to = request.to;

        rpc.call::<Bytes>(RequestMethod::Call(CallParams::new(
            request,
            Some(block.block_spec_or_latest()),
        )))
        .await
        .map_err(|error| self.remote_call_error(method, to, error))
    }

    /// Queries the chain ID reported by the remote node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn remote_chain_id(&self) -> Result<u64, OracleError> {
        self.rpc()?
            .chain_id()
            .await
            .map_err(|error| self.remote_call_error("eth_chainId", None, error))
    }

    /// Queries the number of the most recent block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<u64, OracleError> {
        self.rpc()?
            .block_number()
            .await
            .map_err(|error| self.remote_call_error("eth_blockNumber", None, error))
    }
}

/// Resolves a client for the selected chain.
///
/// See [`L2Client::resolve`].
pub fn get_l2_client(options: ClientOptions) -> Result<L2Client, OracleError> {
    L2Client::resolve(&options)
}
