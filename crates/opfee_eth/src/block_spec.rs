use std::{fmt, str::FromStr};

/// A symbolic reference to a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// The lowest numbered block the client has available
    Earliest,
    /// The most recent block in the canonical chain
    #[default]
    Latest,
    /// The pending state/transactions
    Pending,
    /// The most recent safe head block
    Safe,
    /// The most recent finalized block
    Finalized,
}

impl BlockTag {
    /// Returns the JSON-RPC name of the tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Earliest => "earliest",
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown block tag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block tag: '{0}'")]
pub struct ParseBlockTagError(String);

impl FromStr for BlockTag {
    type Err = ParseBlockTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earliest" => Ok(BlockTag::Earliest),
            "latest" => Ok(BlockTag::Latest),
            "pending" => Ok(BlockTag::Pending),
            "safe" => Ok(BlockTag::Safe),
            "finalized" => Ok(BlockTag::Finalized),
            _ => Err(ParseBlockTagError(s.to_string())),
        }
    }
}

/// A block argument as it is sent over JSON-RPC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// Block number
    #[serde(with = "alloy_serde::quantity")]
    Number(u64),
    /// Block tag
    Tag(BlockTag),
}

impl BlockSpec {
    /// Constructs an instance for the latest block.
    pub const fn latest() -> Self {
        Self::Tag(BlockTag::Latest)
    }

    /// Constructs an instance for the pending block.
    pub const fn pending() -> Self {
        Self::Tag(BlockTag::Pending)
    }
}

/// Pins a remote read to a point in chain history.
///
/// At most one of a block number or a block tag can be provided.
/// [`BlockPin::Unpinned`] resolves against the chain's current head, which
/// is not deterministic across repeated calls. Pin a block number when
/// results need to be reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockPin {
    /// Read the state at the given block number.
    Number(u64),
    /// Read the state at the given block tag.
    Tag(BlockTag),
    /// Read the state at the chain's current head.
    #[default]
    Unpinned,
}

impl BlockPin {
    /// Returns the JSON-RPC block argument, if the read is pinned.
    pub const fn block_spec(&self) -> Option<BlockSpec> {
        match self {
            BlockPin::Number(number) => Some(BlockSpec::Number(*number)),
            BlockPin::Tag(tag) => Some(BlockSpec::Tag(*tag)),
            BlockPin::Unpinned => None,
        }
    }

    /// Returns the JSON-RPC block argument, defaulting to the latest block
    /// for unpinned reads.
    pub const fn block_spec_or_latest(&self) -> BlockSpec {
        match self.block_spec() {
            Some(spec) => spec,
            None => BlockSpec::latest(),
        }
    }

    /// Whether repeated reads with this pin observe the same chain state.
    pub const fn is_deterministic(&self) -> bool {
        matches!(self, BlockPin::Number(_) | BlockPin::Tag(BlockTag::Earliest))
    }
}

impl From<u64> for BlockPin {
    fn from(value: u64) -> Self {
        BlockPin::Number(value)
    }
}

impl From<BlockTag> for BlockPin {
    fn from(value: BlockTag) -> Self {
        BlockPin::Tag(value)
    }
}

impl From<BlockSpec> for BlockPin {
    fn from(value: BlockSpec) -> Self {
        match value {
            BlockSpec::Number(number) => BlockPin::Number(number),
            BlockSpec::Tag(tag) => BlockPin::Tag(tag),
        }
    }
}

impl From<Option<BlockSpec>> for BlockPin {
    fn from(value: Option<BlockSpec>) -> Self {
        value.map_or(BlockPin::Unpinned, BlockPin::from)
    }
}
