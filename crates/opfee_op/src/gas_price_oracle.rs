use alloy_sol_types::SolCall;
use opfee_eth::{Address, BlockPin, Bytes, CallRequest, U256};

use crate::{
    client::{ClientOptions, L2Client},
    error::OracleError,
    predeploys::GAS_PRICE_ORACLE_ADDRESS,
};

#[allow(missing_docs)]
mod abi {
    alloy_sol_types::sol! {
        /// Fee parameters of an OP-stack chain, exposed by a predeploy.
        interface IGasPriceOracle {
            function baseFee() external view returns (uint256);
            function gasPrice() external view returns (uint256);
            function decimals() external pure returns (uint256);
            function l1BaseFee() external view returns (uint256);
            function overhead() external view returns (uint256);
            function scalar() external view returns (uint256);
            function version() external view returns (string memory);
            function getL1Fee(bytes memory _data) external view returns (uint256);
            function getL1GasUsed(bytes memory _data) external view returns (uint256);
        }
    }
}

pub use abi::IGasPriceOracle;

/// The `GasPriceOracle` predeploy of an L2 chain.
///
/// Every read is a separate `eth_call`; nothing is cached.
#[derive(Clone, Debug)]
pub struct GasPriceOracle {
    client: L2Client,
    address: Address,
}

impl GasPriceOracle {
    /// Binds the predeploy at its canonical address.
    pub fn new(client: &L2Client) -> Self {
        Self::at(client, GAS_PRICE_ORACLE_ADDRESS)
    }

    /// Binds an oracle deployed at a custom address.
    pub fn at(client: &L2Client, address: Address) -> Self {
        Self {
            client: client.clone(),
            address,
        }
    }

    /// The address of the oracle.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The client used for reads.
    pub fn client(&self) -> &L2Client {
        &self.client
    }

    async fn read<CallT: SolCall>(
        &self,
        call: CallT,
        block: BlockPin,
    ) -> Result<CallT::Return, OracleError> {
        let request = CallRequest {
            to: Some(self.address),
            data: Some(Bytes::from(call.abi_encode())),
            ..CallRequest::default()
        };

        let output = self.client.call(CallT::SIGNATURE, request, block).await?;

        CallT::abi_decode_returns(&output).map_err(|error| {
            self.client
                .remote_call_error(CallT::SIGNATURE, Some(self.address), error)
        })
    }

    /// The L2 base fee, in wei.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn base_fee(&self, block: BlockPin) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::baseFeeCall {}, block).await
    }

    /// The L2 gas price, in wei.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn gas_price(&self, block: BlockPin) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::gasPriceCall {}, block).await
    }

    /// The number of decimals of the scalar.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn decimals(&self, block: BlockPin) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::decimalsCall {}, block).await
    }

    /// The latest known L1 base fee, in wei.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn l1_base_fee(&self, block: BlockPin) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::l1BaseFeeCall {}, block).await
    }

    /// The fixed L1 gas overhead.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn overhead(&self, block: BlockPin) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::overheadCall {}, block).await
    }

    /// The dynamic L1 fee scalar.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn scalar(&self, block: BlockPin) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::scalarCall {}, block).await
    }

    /// The semantic version of the oracle contract.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn version(&self, block: BlockPin) -> Result<String, OracleError> {
        self.read(IGasPriceOracle::versionCall {}, block).await
    }

    /// The L1 data fee, in wei, of a transaction with the provided unsigned
    /// serialized form.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, data)))]
    pub async fn get_l1_fee(&self, data: Bytes, block: BlockPin) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::getL1FeeCall { _data: data }, block)
            .await
    }

    /// The L1 gas used by a transaction with the provided unsigned serialized
    /// form.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, data)))]
    pub async fn get_l1_gas_used(
        &self,
        data: Bytes,
        block: BlockPin,
    ) -> Result<U256, OracleError> {
        self.read(IGasPriceOracle::getL1GasUsedCall { _data: data }, block)
            .await
    }
}

/// Resolves a client and binds the `GasPriceOracle` predeploy.
pub fn gas_price_oracle_contract(options: &ClientOptions) -> Result<GasPriceOracle, OracleError> {
    L2Client::resolve(options).map(|client| GasPriceOracle::new(&client))
}

/// Reads the L2 base fee. See [`GasPriceOracle::base_fee`].
pub async fn base_fee(options: &ClientOptions, block: BlockPin) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?.base_fee(block).await
}

/// Reads the L2 gas price. See [`GasPriceOracle::gas_price`].
pub async fn gas_price(options: &ClientOptions, block: BlockPin) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?.gas_price(block).await
}

/// Reads the scalar decimals. See [`GasPriceOracle::decimals`].
pub async fn decimals(options: &ClientOptions, block: BlockPin) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?.decimals(block).await
}

/// Reads the L1 base fee. See [`GasPriceOracle::l1_base_fee`].
pub async fn l1_base_fee(options: &ClientOptions, block: BlockPin) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?.l1_base_fee(block).await
}

/// Reads the L1 gas overhead. See [`GasPriceOracle::overhead`].
pub async fn overhead(options: &ClientOptions, block: BlockPin) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?.overhead(block).await
}

/// Reads the L1 fee scalar. See [`GasPriceOracle::scalar`].
pub async fn scalar(options: &ClientOptions, block: BlockPin) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?.scalar(block).await
}

/// Reads the oracle version. See [`GasPriceOracle::version`].
pub async fn version(options: &ClientOptions, block: BlockPin) -> Result<String, OracleError> {
    gas_price_oracle_contract(options)?.version(block).await
}

/// Computes the L1 data fee of `data`. See [`GasPriceOracle::get_l1_fee`].
pub async fn get_l1_fee(
    data: Bytes,
    options: &ClientOptions,
    block: BlockPin,
) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?
        .get_l1_fee(data, block)
        .await
}

/// Computes the L1 gas used by `data`. See
/// [`GasPriceOracle::get_l1_gas_used`].
pub async fn get_l1_gas_used(
    data: Bytes,
    options: &ClientOptions,
    block: BlockPin,
) -> Result<U256, OracleError> {
    gas_price_oracle_contract(options)?
        .get_l1_gas_used(data, block)
        .await
}
