use opfee_eth::{address, Address};

/// The address of the `GasPriceOracle` predeploy.
///
/// The predeploy lives at the same address on every OP-stack chain.
pub const GAS_PRICE_ORACLE_ADDRESS: Address =
    address!("0x420000000000000000000000000000000000000f");
