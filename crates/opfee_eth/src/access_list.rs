use crate::{Address, B256};

/// An entry of an EIP-2930 access list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    /// Account address that will be loaded at the start of execution
    pub address: Address,
    /// Keys of storage slots that will be loaded at the start of execution
    pub storage_keys: Vec<B256>,
}
