use std::{collections::HashMap, sync::LazyLock};

/// OP Mainnet chain ID
pub const OP_MAINNET_CHAIN_ID: u64 = 0xa;

/// OP Goerli chain ID
pub const OP_GOERLI_CHAIN_ID: u64 = 0x1a4;

/// OP Sepolia chain ID
pub const OP_SEPOLIA_CHAIN_ID: u64 = 0xaa37dc;

/// Base Mainnet chain ID
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

/// Base Goerli chain ID
pub const BASE_GOERLI_CHAIN_ID: u64 = 84531;

/// Base Sepolia chain ID
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

/// Zora Mainnet chain ID
pub const ZORA_MAINNET_CHAIN_ID: u64 = 7_777_777;

const UNKNOWN_CHAIN_NAME: &str = "op-chain";
const UNKNOWN_CHAIN_NETWORK: &str = "Unknown OP Chain";

/// The native currency of a chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    /// Human-readable name, e.g. "Ether"
    pub name: String,
    /// Ticker symbol, e.g. "ETH"
    pub symbol: String,
    /// Number of decimals of the smallest unit
    pub decimals: u8,
}

impl NativeCurrency {
    /// Ether, as used on OP Mainnet.
    pub fn ether() -> Self {
        Self::new("Ether", "ETH", 18)
    }

    /// Constructs a new instance.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// The RPC endpoints of a chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RpcUrls {
    /// Endpoints used for reads
    pub default: Vec<String>,
    /// Publicly available endpoints
    pub public: Vec<String>,
}

impl RpcUrls {
    /// Uses the same single endpoint for reads and as public endpoint.
    pub fn single(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            default: vec![url.clone()],
            public: vec![url],
        }
    }
}

/// A block explorer of a chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct BlockExplorer {
    /// Name of the explorer
    pub name: String,
    /// Base URL of the explorer
    pub url: String,
}

impl BlockExplorer {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    fn op_mainnet() -> Self {
        Self::new("Etherscan", "https://optimistic.etherscan.io")
    }
}

/// Metadata of an OP-stack chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    /// Chain ID
    pub id: u64,
    /// Human-readable chain name
    pub name: String,
    /// Network identifier
    pub network: String,
    /// Native currency
    pub native_currency: NativeCurrency,
    /// RPC endpoints
    pub rpc_urls: RpcUrls,
    /// Default block explorer
    pub block_explorer: BlockExplorer,
}

impl ChainMetadata {
    /// Resolves the metadata of a chain.
    ///
    /// An explicit `rpc_url` replaces the known chain's endpoints. Chains
    /// that are not known use generic metadata with OP Mainnet's currency and
    /// block explorer. Returns `None` if no endpoint can be determined.
    pub fn resolve(
        chain_id: u64,
        rpc_url: Option<&str>,
        native_currency: Option<NativeCurrency>,
    ) -> Option<Self> {
        let known = known_chain(chain_id);

        let rpc_urls = match (rpc_url, known) {
            (Some(url), _) => RpcUrls::single(url),
            (None, Some(known)) => known.rpc_urls.clone(),
            (None, None) => return None,
        };

        let metadata = match known {
            Some(known) => Self {
                native_currency: native_currency.unwrap_or_else(|| known.native_currency.clone()),
                rpc_urls,
                ..known.clone()
            },
            None => Self {
                id: chain_id,
                name: UNKNOWN_CHAIN_NAME.to_string(),
                network: UNKNOWN_CHAIN_NETWORK.to_string(),
                native_currency: native_currency.unwrap_or_else(NativeCurrency::ether),
                rpc_urls,
                block_explorer: BlockExplorer::op_mainnet(),
            },
        };

        Some(metadata)
    }

    /// The endpoint used for reads.
    pub fn default_rpc_url(&self) -> Option<&str> {
        self.rpc_urls.default.first().map(String::as_str)
    }
}

fn chain(
    id: u64,
    name: &str,
    network: &str,
    native_currency: NativeCurrency,
    rpc_url: &str,
    block_explorer: BlockExplorer,
) -> (u64, ChainMetadata) {
    (
        id,
        ChainMetadata {
            id,
            name: name.to_string(),
            network: network.to_string(),
            native_currency,
            rpc_urls: RpcUrls::single(rpc_url),
            block_explorer,
        },
    )
}

/// OP-stack chains with known public endpoints.
pub static KNOWN_CHAINS: LazyLock<HashMap<u64, ChainMetadata>> = LazyLock::new(|| {
    let goerli_ether = || NativeCurrency::new("Goerli Ether", "ETH", 18);
    let sepolia_ether = || NativeCurrency::new("Sepolia Ether", "ETH", 18);

    HashMap::from([
        chain(
            OP_MAINNET_CHAIN_ID,
            "OP Mainnet",
            "optimism",
            NativeCurrency::ether(),
            "https://mainnet.optimism.io",
            BlockExplorer::op_mainnet(),
        ),
        chain(
            OP_GOERLI_CHAIN_ID,
            "Optimism Goerli",
            "optimism-goerli",
            goerli_ether(),
            "https://goerli.optimism.io",
            BlockExplorer::new("Etherscan", "https://goerli-optimism.etherscan.io"),
        ),
        chain(
            OP_SEPOLIA_CHAIN_ID,
            "OP Sepolia",
            "optimism-sepolia",
            sepolia_ether(),
            "https://sepolia.optimism.io",
            BlockExplorer::new("Blockscout", "https://optimism-sepolia.blockscout.com"),
        ),
        chain(
            BASE_MAINNET_CHAIN_ID,
            "Base",
            "base",
            NativeCurrency::ether(),
            "https://mainnet.base.org",
            BlockExplorer::new("Basescan", "https://basescan.org"),
        ),
        chain(
            BASE_GOERLI_CHAIN_ID,
            "Base Goerli",
            "base-goerli",
            goerli_ether(),
            "https://goerli.base.org",
            BlockExplorer::new("Basescan", "https://goerli.basescan.org"),
        ),
        chain(
            BASE_SEPOLIA_CHAIN_ID,
            "Base Sepolia",
            "base-sepolia",
            sepolia_ether(),
            "https://sepolia.base.org",
            BlockExplorer::new("Basescan", "https://sepolia.basescan.org"),
        ),
        chain(
            ZORA_MAINNET_CHAIN_ID,
            "Zora",
            "zora",
            NativeCurrency::ether(),
            "https://rpc.zora.energy",
            BlockExplorer::new("Explorer", "https://explorer.zora.energy"),
        ),
    ])
});

/// Returns the metadata of a known chain.
pub fn known_chain(chain_id: u64) -> Option<&'static ChainMetadata> {
    KNOWN_CHAINS.get(&chain_id)
}
