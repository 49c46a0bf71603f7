use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON-RPC 2.0 error object.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Deserialize, Serialize)]
#[error("{message} (code: {code})")]
pub struct Error {
    /// error code
    pub code: i64,
    /// error message
    pub message: String,
    /// optional data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A JSON-RPC request
#[derive(Clone, Debug, Serialize)]
pub struct Request<MethodT> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// the method to invoke, with its parameters
    #[serde(flatten)]
    pub method: MethodT,
    /// the request ID, to be correlated via the response's ID
    pub id: Id,
}

/// A JSON-RPC response
#[derive(Debug, Deserialize)]
pub struct Response<SuccessT> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// the request ID. `None` if the remote node could not parse the request.
    pub id: Option<Id>,
    /// the result or error of the request
    #[serde(flatten)]
    pub data: ResponseData<SuccessT>,
}

/// Represents the result of an RPC method call.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResponseData<SuccessT> {
    /// an error response
    Error {
        /// the error
        error: Error,
    },
    /// a success response
    Success {
        /// the result
        result: SuccessT,
    },
}

impl<SuccessT> ResponseData<SuccessT> {
    /// Returns a [`Result`] where `Success` is mapped to `Ok` and `Error` to
    /// `Err`.
    pub fn into_result(self) -> Result<SuccessT, Error> {
        match self {
            ResponseData::Success { result } => Ok(result),
            ResponseData::Error { error } => Err(error),
        }
    }
}

/// Represents JSON-RPC request/response id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// numeric id
    Num(u64),
    /// string id
    Str(String),
}

/// Supported JSON-RPC versions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// Version 2.0
    V2_0,
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Version::V2_0 => serializer.serialize_str("2.0"),
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let version = String::deserialize(deserializer)?;
        match version.as_str() {
            "2.0" => Ok(Version::V2_0),
            _ => Err(serde::de::Error::custom(format!(
                "unsupported JSON-RPC version: '{version}'"
            ))),
        }
    }
}
