#![warn(missing_docs)]

//! Fee estimation for transactions on OP-stack chains.
//!
//! A transaction on an OP-stack chain pays for its L2 execution and for
//! publishing its data to L1. [`estimate_fees`] queries both from the chain
//! concurrently. The individual `GasPriceOracle` reads are re-exported for
//! callers that need the underlying parameters.

pub use alloy_sol_types::{sol, SolCall};
use opfee_eth::CallRequest;
pub use opfee_eth::{AccessListItem, Address};
pub use opfee_op::{
    base_fee, chains, decimals, gas_price, gas_price_oracle_contract, get_l1_fee,
    get_l1_gas_used, get_l2_client, l1_base_fee, overhead, scalar, version, BlockPin, BlockTag,
    Bytes, ChainMetadata, ClientOptions, ErrorKind, GasPriceOracle, L2Client, NativeCurrency,
    OracleError, RemoteCallError, GAS_PRICE_ORACLE_ADDRESS, U256,
};

/// Error returned by [`estimate_fees`].
pub type FeeEstimationError = OracleError;

/// Parameters of a fee estimate.
#[derive(Clone, Debug)]
pub struct EstimateFeesParams {
    /// The chain to estimate on
    pub client: ClientOptions,
    /// The block to estimate at
    pub block: BlockPin,
    /// The block to compute the L1 data fee at. Defaults to `block`.
    pub l1_block: Option<BlockPin>,
    /// The unsigned serialized transaction or its call data
    pub data: Bytes,
    /// The sender
    pub account: Address,
    /// The recipient. `None` for contract creation.
    pub to: Option<Address>,
    /// Gas limit
    pub gas: Option<u64>,
    /// Sender nonce
    pub nonce: Option<u64>,
    /// Transferred value, in wei
    pub value: Option<U256>,
    /// Legacy gas price, in wei
    pub gas_price: Option<U256>,
    /// EIP-2930 access list
    pub access_list: Option<Vec<AccessListItem>>,
    /// EIP-1559 max fee per gas, in wei
    pub max_fee_per_gas: Option<U256>,
    /// EIP-1559 max priority fee per gas, in wei
    pub max_priority_fee_per_gas: Option<U256>,
}

impl EstimateFeesParams {
    /// Constructs an unpinned estimate for a transaction with the provided
    /// sender and data.
    pub fn new(client: ClientOptions, account: Address, data: Bytes) -> Self {
        Self {
            client,
            block: BlockPin::Unpinned,
            l1_block: None,
            data,
            account,
            to: None,
            gas: None,
            nonce: None,
            value: None,
            gas_price: None,
            access_list: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
        }
    }

    /// The block that the L1 data fee is computed at.
    pub fn effective_l1_block(&self) -> BlockPin {
        self.l1_block.unwrap_or(self.block)
    }

    fn call_request(&self) -> CallRequest {
        CallRequest {
            from: Some(self.account),
            to: self.to,
            gas: self.gas,
            gas_price: self.gas_price,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            value: self.value,
            nonce: self.nonce,
            data: Some(self.data.clone()),
            access_list: self.access_list.clone(),
        }
    }
}

/// Configuration of [`estimate_fees_with_config`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EstimateFeesConfig {
    /// Rejects estimates whose L1 data fee is pinned to a different block
    /// than the L2 gas estimate.
    pub strict_block_pins: bool,
}

/// Estimates the fee of a transaction: the L2 execution gas estimate, in gas
/// units, plus the L1 data fee of `params.data`, in wei. The L2 estimate is
/// not multiplied by a gas price.
///
/// Both values are queried concurrently at the same block. If either query
/// fails, the estimate fails with that error.
pub async fn estimate_fees(params: EstimateFeesParams) -> Result<U256, FeeEstimationError> {
    estimate_fees_with_config(params, EstimateFeesConfig::default()).await
}

/// Estimates the fee of a transaction. See [`estimate_fees`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub async fn estimate_fees_with_config(
    params: EstimateFeesParams,
    config: EstimateFeesConfig,
) -> Result<U256, FeeEstimationError> {
    let l1_block = params.effective_l1_block();
    if l1_block != params.block {
        if config.strict_block_pins {
            return Err(OracleError::InconsistentBlockPins {
                l2: params.block,
                l1: l1_block,
            });
        }

        log::debug!(
            "Estimating L2 gas at {:?} and the L1 data fee at {l1_block:?}",
            params.block
        );
    }

    let client = L2Client::resolve(&params.client)?;
    client.ensure_fetch_capability()?;

    let oracle = GasPriceOracle::new(&client);
    let request = params.call_request();

    let (l2_gas, l1_fee) = tokio::try_join!(
        client.estimate_gas(request, params.block),
        oracle.get_l1_fee(params.data, l1_block),
    )?;

    Ok(l2_gas.saturating_add(l1_fee))
}
