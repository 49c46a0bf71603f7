use opfee_eth::CallParams;
use opfee_rpc_client::RpcMethod;

/// JSON-RPC methods issued against an OP-stack node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// `eth_blockNumber`
    #[serde(rename = "eth_blockNumber", with = "opfee_eth::serde::empty_params")]
    BlockNumber(()),
    /// `eth_call`
    #[serde(rename = "eth_call")]
    Call(CallParams),
    /// `eth_chainId`
    #[serde(rename = "eth_chainId", with = "opfee_eth::serde::empty_params")]
    ChainId(()),
    /// `eth_estimateGas`
    #[serde(rename = "eth_estimateGas")]
    EstimateGas(CallParams),
}

impl RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        match self {
            RequestMethod::BlockNumber(_) => "eth_blockNumber",
            RequestMethod::Call(_) => "eth_call",
            RequestMethod::ChainId(_) => "eth_chainId",
            RequestMethod::EstimateGas(_) => "eth_estimateGas",
        }
    }

    fn block_number_request() -> Self {
        RequestMethod::BlockNumber(())
    }

    fn chain_id_request() -> Self {
        RequestMethod::ChainId(())
    }
}
