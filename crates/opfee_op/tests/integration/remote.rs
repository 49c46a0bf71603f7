#![cfg(feature = "test-remote")]

use opfee_eth::bytes;
use opfee_op::{
    chains::OP_MAINNET_CHAIN_ID, gas_price_oracle_contract, get_l1_fee, get_l2_client, version,
    BlockPin, ClientOptions, U256,
};
use opfee_test_utils::env::json_rpc_url_provider;

const BLOCK_NUMBER: u64 = 106_773_236;

fn op_mainnet() -> ClientOptions {
    ClientOptions::with_rpc_url(OP_MAINNET_CHAIN_ID, json_rpc_url_provider::op_mainnet())
}

#[tokio::test]
async fn oracle_parameters_at_pinned_block() -> anyhow::Result<()> {
    let block = BlockPin::Number(BLOCK_NUMBER);
    let oracle = gas_price_oracle_contract(&op_mainnet())?;

    let (base_fee, decimals, scalar, version) = tokio::try_join!(
        oracle.base_fee(block),
        oracle.decimals(block),
        oracle.scalar(block),
        oracle.version(block),
    )?;

    assert_eq!(base_fee, U256::from(64));
    assert_eq!(decimals, U256::from(6));
    assert_eq!(scalar, U256::from(684_000));
    assert_eq!(version, "1.0.0");

    Ok(())
}

#[tokio::test]
async fn l1_fee_at_pinned_block() -> anyhow::Result<()> {
    let block = BlockPin::Number(BLOCK_NUMBER);
    let data = bytes!(
        "0x5c19a95c00000000000000000000000046abfe1c972fca43766d6ad70e1c1df72f4bb4d1"
    );
    let oracle = gas_price_oracle_contract(&op_mainnet())?;

    let l1_fee = oracle.get_l1_fee(data.clone(), block).await?;
    assert_eq!(l1_fee, U256::from(15_860_541_911_298_u64));

    let l1_gas_used = oracle.get_l1_gas_used(data.clone(), block).await?;
    assert_eq!(l1_gas_used, U256::from(1708));

    // Pinned reads are deterministic
    assert_eq!(get_l1_fee(data, &op_mainnet(), block).await?, l1_fee);

    Ok(())
}

#[tokio::test]
async fn client_handle_matches_selector() -> anyhow::Result<()> {
    let block = BlockPin::Number(BLOCK_NUMBER);
    let client = get_l2_client(op_mainnet())?;

    assert_eq!(client.remote_chain_id().await?, OP_MAINNET_CHAIN_ID);
    assert_eq!(
        version(&ClientOptions::from(client), block).await?,
        version(&op_mainnet(), block).await?
    );

    Ok(())
}

#[tokio::test]
async fn unpinned_read() -> anyhow::Result<()> {
    let version = version(&op_mainnet(), BlockPin::Unpinned).await?;
    assert!(!version.is_empty());

    Ok(())
}
