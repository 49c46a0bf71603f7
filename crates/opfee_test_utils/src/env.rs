//! Helper functions for environment variables

fn get_non_empty_env_var(name: &'static str) -> Option<String> {
    std::env::var_os(name)
        .and_then(|value| value.into_string().ok())
        .filter(|value| !value.is_empty())
}

fn get_non_empty_env_var_or_panic(name: &'static str) -> String {
    let result = std::env::var_os(name)
        .unwrap_or_else(|| panic!("{name} environment variable not defined"))
        .into_string()
        .expect("Couldn't convert OsString into a String");
    if result.is_empty() {
        panic!("{name} environment variable is empty")
    } else {
        result
    }
}

/// This module exposes a provider-agnostic interface to obtain JSON-RPC
/// provider URLs for the OP-stack chains used across the codebase.
pub mod json_rpc_url_provider {
    use super::{get_non_empty_env_var, get_non_empty_env_var_or_panic};

    /// Returns Alchemy JSON RPC provider URL from the environment variable.
    ///
    /// # Panics
    ///
    /// Panics if the `ALCHEMY_URL` environment variable is not defined or is
    /// empty.
    fn raw_eth_mainnet_alchemy_url() -> String {
        get_non_empty_env_var_or_panic("ALCHEMY_URL")
    }

    /// Returns an OP Mainnet archive node URL.
    ///
    /// Uses `OP_MAINNET_RPC_URL` if defined, otherwise derives the URL from
    /// `ALCHEMY_URL`.
    pub fn op_mainnet() -> String {
        get_non_empty_env_var("OP_MAINNET_RPC_URL")
            .unwrap_or_else(|| raw_eth_mainnet_alchemy_url().replace("eth-", "opt-"))
    }
}
