#![warn(missing_docs)]

//! Read access to the `GasPriceOracle` predeploy of OP-stack chains.
//!
//! Resolve an [`L2Client`] from [`ClientOptions`], then query the oracle
//! through [`GasPriceOracle`] or the free functions of the same names.

/// OP-stack chain metadata
pub mod chains;
mod client;
mod error;
/// `GasPriceOracle` bindings
pub mod gas_price_oracle;
/// Addresses of OP-stack predeploys
pub mod predeploys;
/// JSON-RPC request methods
pub mod request_methods;

pub use opfee_eth::{BlockPin, BlockTag, Bytes, U256};

pub use self::{
    chains::{BlockExplorer, ChainMetadata, NativeCurrency, RpcUrls},
    client::{get_l2_client, ClientOptions, L2Client},
    error::{ErrorKind, OracleError, RemoteCallError},
    gas_price_oracle::{
        base_fee, decimals, gas_price, gas_price_oracle_contract, get_l1_fee, get_l1_gas_used,
        l1_base_fee, overhead, scalar, version, GasPriceOracle, IGasPriceOracle,
    },
    predeploys::GAS_PRICE_ORACLE_ADDRESS,
};
