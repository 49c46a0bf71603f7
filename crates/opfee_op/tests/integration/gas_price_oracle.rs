use alloy_sol_types::{SolCall, SolValue};
use mockito::{Matcher, Mock, ServerGuard};
use opfee_eth::{bytes, hex, Bytes};
use opfee_op::{
    base_fee, chains::OP_MAINNET_CHAIN_ID, gas_price_oracle_contract, get_l1_fee, get_l1_gas_used,
    get_l2_client, version, BlockPin, BlockTag, ClientOptions, ErrorKind, IGasPriceOracle, OracleError,
    RemoteCallError, GAS_PRICE_ORACLE_ADDRESS, U256,
};
use opfee_test_utils::rpc::{error_body, method_body, success_body};

const BLOCK_NUMBER: u64 = 106_773_236;
const BLOCK_NUMBER_HEX: &str = "0x65d3af4";

fn delegate_data() -> Bytes {
    bytes!("0x5c19a95c00000000000000000000000046abfe1c972fca43766d6ad70e1c1df72f4bb4d1")
}

/// ABI-encodes a single return value.
fn returns<ValueT: SolValue>(value: ValueT) -> String {
    hex::encode_prefixed((value,).abi_encode_params())
}

fn options(server: &ServerGuard) -> ClientOptions {
    ClientOptions::with_rpc_url(OP_MAINNET_CHAIN_ID, server.url())
}

async fn mock_eth_call(
    server: &mut ServerGuard,
    selector: [u8; 4],
    block: &str,
    response_body: String,
) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(method_body("eth_call")),
            Matcher::Regex(format!("\"data\":\"0x{}", hex::encode(selector))),
            Matcher::Regex(format!("\"{block}\"")),
        ]))
        .with_header("content-type", "application/json")
        .with_body(response_body)
        .create_async()
        .await
}

#[tokio::test]
async fn reads_uint256_parameters() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mocks = [
        mock_eth_call(
            &mut server,
            IGasPriceOracle::baseFeeCall::SELECTOR,
            BLOCK_NUMBER_HEX,
            success_body(0, returns(U256::from(64))),
        )
        .await,
        mock_eth_call(
            &mut server,
            IGasPriceOracle::decimalsCall::SELECTOR,
            BLOCK_NUMBER_HEX,
            success_body(0, returns(U256::from(6))),
        )
        .await,
        mock_eth_call(
            &mut server,
            IGasPriceOracle::scalarCall::SELECTOR,
            BLOCK_NUMBER_HEX,
            success_body(0, returns(U256::from(684_000))),
        )
        .await,
    ];

    let block = BlockPin::Number(BLOCK_NUMBER);
    let oracle = gas_price_oracle_contract(&options(&server))?;

    assert_eq!(oracle.base_fee(block).await?, U256::from(64));
    assert_eq!(oracle.decimals(block).await?, U256::from(6));
    assert_eq!(oracle.scalar(block).await?, U256::from(684_000));

    for mock in mocks {
        mock.assert_async().await;
    }
    Ok(())
}

#[tokio::test]
async fn reads_version() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_eth_call(
        &mut server,
        IGasPriceOracle::versionCall::SELECTOR,
        BLOCK_NUMBER_HEX,
        success_body(0, returns("1.0.0".to_string())),
    )
    .await;

    let version = version(&options(&server), BlockPin::Number(BLOCK_NUMBER)).await?;
    assert_eq!(version, "1.0.0");

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn l1_fee_encodes_data_argument() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let call = IGasPriceOracle::getL1FeeCall {
        _data: delegate_data(),
    };
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_call",
            "params": [
                {
                    "to": GAS_PRICE_ORACLE_ADDRESS,
                    "data": hex::encode_prefixed(call.abi_encode()),
                },
                BLOCK_NUMBER_HEX,
            ],
        })))
        .with_body(success_body(
            0,
            returns(U256::from(15_860_541_911_298_u64)),
        ))
        .create_async()
        .await;

    let l1_fee = get_l1_fee(
        delegate_data(),
        &options(&server),
        BlockPin::Number(BLOCK_NUMBER),
    )
    .await?;
    assert_eq!(l1_fee, U256::from(15_860_541_911_298_u64));

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn l1_gas_used_encodes_data_argument() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let call = IGasPriceOracle::getL1GasUsedCall {
        _data: delegate_data(),
    };
    let encoded_call = hex::encode_prefixed(call.abi_encode());
    assert!(encoded_call.starts_with("0xde26c4a1"));

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_call",
            "params": [
                {
                    "to": GAS_PRICE_ORACLE_ADDRESS,
                    "data": encoded_call,
                },
                BLOCK_NUMBER_HEX,
            ],
        })))
        .with_body(success_body(0, returns(U256::from(1708))))
        .create_async()
        .await;

    let l1_gas_used = get_l1_gas_used(
        delegate_data(),
        &options(&server),
        BlockPin::Number(BLOCK_NUMBER),
    )
    .await?;
    assert_eq!(l1_gas_used, U256::from(1708));

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn unpinned_reads_use_latest_block() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_eth_call(
        &mut server,
        IGasPriceOracle::gasPriceCall::SELECTOR,
        "latest",
        success_body(0, returns(U256::from(1_000_000))),
    )
    .await;

    let oracle = gas_price_oracle_contract(&options(&server))?;
    assert_eq!(
        oracle.gas_price(BlockPin::Unpinned).await?,
        U256::from(1_000_000)
    );

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn tag_pins_are_forwarded() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_eth_call(
        &mut server,
        IGasPriceOracle::l1BaseFeeCall::SELECTOR,
        "finalized",
        success_body(0, returns(U256::from(30_000_000_000_u64))),
    )
    .await;

    let oracle = gas_price_oracle_contract(&options(&server))?;
    assert_eq!(
        oracle.l1_base_fee(BlockPin::Tag(BlockTag::Finalized)).await?,
        U256::from(30_000_000_000_u64)
    );

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn client_handle_and_selector_agree() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Regex(hex::encode(
            IGasPriceOracle::overheadCall::SELECTOR,
        )))
        .with_body(success_body(0, returns(U256::from(188))))
        .expect(2)
        .create_async()
        .await;

    let block = BlockPin::Number(BLOCK_NUMBER);
    let client = get_l2_client(options(&server))?;

    let from_selector = gas_price_oracle_contract(&options(&server))?
        .overhead(block)
        .await?;
    let from_handle = gas_price_oracle_contract(&ClientOptions::from(client))?
        .overhead(block)
        .await?;
    assert_eq!(from_selector, from_handle);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn revert_is_a_remote_call_error() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_eth_call(
        &mut server,
        IGasPriceOracle::baseFeeCall::SELECTOR,
        BLOCK_NUMBER_HEX,
        error_body(0, 3, "execution reverted"),
    )
    .await;

    let error = base_fee(&options(&server), BlockPin::Number(BLOCK_NUMBER))
        .await
        .expect_err("call reverts");

    assert_eq!(error.kind(), ErrorKind::RemoteCall);
    match error {
        OracleError::RemoteCall {
            method,
            address,
            chain_id,
            source,
        } => {
            assert_eq!(method, "baseFee()");
            assert_eq!(address, Some(GAS_PRICE_ORACLE_ADDRESS));
            assert_eq!(chain_id, OP_MAINNET_CHAIN_ID);
            assert!(matches!(*source, RemoteCallError::Rpc(_)));
        }
        error => panic!("Invalid error: {error:?}"),
    }

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn malformed_return_data_is_a_decode_error() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_eth_call(
        &mut server,
        IGasPriceOracle::scalarCall::SELECTOR,
        BLOCK_NUMBER_HEX,
        success_body(0, "0x"),
    )
    .await;

    let oracle = gas_price_oracle_contract(&options(&server))?;
    let error = oracle
        .scalar(BlockPin::Number(BLOCK_NUMBER))
        .await
        .expect_err("empty return data");

    match error {
        OracleError::RemoteCall {
            method: "scalar()",
            source,
            ..
        } => assert!(matches!(*source, RemoteCallError::Decode(_))),
        error => panic!("Invalid error: {error:?}"),
    }

    mock.assert_async().await;
    Ok(())
}
