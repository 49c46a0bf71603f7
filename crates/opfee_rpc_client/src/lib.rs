#![warn(missing_docs)]

//! Ethereum JSON-RPC client

mod client;
mod reqwest_error;

/// Types specific to JSON-RPC
pub mod jsonrpc;

pub use self::{
    client::{RpcClient, RpcClientError, RpcMethod},
    reqwest_error::ReqwestError,
};
