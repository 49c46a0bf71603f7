#![cfg(feature = "test-remote")]

use opfee_eth::{address, bytes, CallRequest};
use opfee_estimation::{
    chains::OP_MAINNET_CHAIN_ID, estimate_fees, get_l1_fee, get_l2_client, BlockPin,
    ClientOptions, EstimateFeesParams,
};
use opfee_test_utils::env::json_rpc_url_provider;

const BLOCK_NUMBER: u64 = 106_773_236;

#[tokio::test]
async fn estimate_is_l1_fee_plus_l2_gas() -> anyhow::Result<()> {
    let client =
        ClientOptions::with_rpc_url(OP_MAINNET_CHAIN_ID, json_rpc_url_provider::op_mainnet());
    let block = BlockPin::Number(BLOCK_NUMBER);

    let mut params = EstimateFeesParams::new(
        client.clone(),
        address!("0xe371815c5f8a4f9acd1576879de288acd81269f1"),
        bytes!("0x5c19a95c00000000000000000000000046abfe1c972fca43766d6ad70e1c1df72f4bb4d1"),
    );
    params.to = Some(address!("0x4200000000000000000000000000000000000042"));
    params.block = block;

    let request = CallRequest {
        from: Some(params.account),
        to: params.to,
        data: Some(params.data.clone()),
        ..CallRequest::default()
    };
    let l2_gas = get_l2_client(client.clone())?
        .estimate_gas(request, block)
        .await?;
    let l1_fee = get_l1_fee(params.data.clone(), &client, block).await?;

    let fee = estimate_fees(params).await?;
    assert_eq!(fee, l2_gas + l1_fee);

    Ok(())
}
