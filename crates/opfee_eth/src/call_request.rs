use serde::{ser::SerializeSeq as _, Serialize, Serializer};

use crate::{AccessListItem, Address, BlockSpec, Bytes, U256};

/// For specifying input to methods requiring a transaction object, like
/// `eth_call` and `eth_estimateGas`
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// the address from which the transaction should be sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// the address to which the transaction should be sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// gas
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub gas: Option<u64>,
    /// gas price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// max base fee per gas sender is willing to pay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    /// miner tip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    /// transaction value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// sender nonce
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub nonce: Option<u64>,
    /// transaction data
    #[serde(default, alias = "input", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    /// warm storage access pre-payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_list: Option<Vec<AccessListItem>>,
}

/// Parameters of `eth_call` and `eth_estimateGas`: a transaction object
/// followed by an optional block argument.
///
/// The block argument is omitted from the parameter list when absent, in
/// which case the remote node uses its latest block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallParams {
    /// The transaction object
    pub request: CallRequest,
    /// The block to execute against
    pub block: Option<BlockSpec>,
}

impl CallParams {
    /// Constructs a new instance.
    pub fn new(request: CallRequest, block: Option<BlockSpec>) -> Self {
        Self { request, block }
    }
}

impl Serialize for CallParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.block.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.request)?;
        if let Some(block) = &self.block {
            seq.serialize_element(block)?;
        }
        seq.end()
    }
}
