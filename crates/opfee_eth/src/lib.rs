#![warn(missing_docs)]

//! Ethereum types
//!
//! Ethereum JSON-RPC value types as needed for querying OP-stack fee
//! parameters. They are based on the `alloy-primitives` types.

/// Access list types
mod access_list;
/// Block specification and pinning
mod block_spec;
/// Input type for `eth_call` and `eth_estimateGas`
mod call_request;
pub mod serde;

pub use alloy_primitives::{address, bytes, hex, Address, Bytes, B256, U256, U64};

pub use self::{
    access_list::AccessListItem,
    block_spec::{BlockPin, BlockSpec, BlockTag, ParseBlockTagError},
    call_request::{CallParams, CallRequest},
};
