//! Shared helpers for tests.

pub mod env;
pub mod rpc;
