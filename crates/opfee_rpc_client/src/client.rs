use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

use opfee_eth::U64;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client as HttpClient,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{jsonrpc, ReqwestError};

const USER_AGENT: &str = concat!("opfee ", env!("CARGO_PKG_VERSION"));

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The message could not be sent to the remote node
    #[error(transparent)]
    FailedToSend(ReqwestError),

    /// The remote node failed to reply with the body of the response
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(ReqwestError),

    /// The server returned an error code.
    #[error("The Http server returned error status code: {0}")]
    HttpStatus(ReqwestError),

    /// The HTTP client could not be constructed in this runtime.
    #[error("No HTTP client is available: {0}")]
    HttpClientUnavailable(ReqwestError),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned an invalid JSON-RPC response.
    #[error("Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'")]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The JSON-RPC returned an error.
    #[error("{error}. Request: {request}")]
    JsonRpcError {
        /// The JSON-RPC error
        error: jsonrpc::Error,
        /// The request JSON
        request: String,
    },

    /// The URL uses a scheme that cannot be fetched over HTTP.
    #[error("Unsupported URL scheme '{scheme}'. Only 'http' and 'https' are supported")]
    UnsupportedUrlScheme {
        /// The URL's scheme
        scheme: String,
    },
}

impl RpcClientError {
    /// Whether the error indicates that the runtime cannot fetch from the
    /// remote node at all, as opposed to a failure of a particular request.
    pub fn is_fetch_unavailable(&self) -> bool {
        matches!(
            self,
            RpcClientError::HttpClientUnavailable(_) | RpcClientError::UnsupportedUrlScheme { .. }
        )
    }
}

/// A JSON-RPC method that can be sent by an [`RpcClient`].
pub trait RpcMethod {
    /// The name of the method, e.g. `eth_call`.
    fn name(&self) -> &'static str;

    /// Creates a request for `eth_blockNumber`.
    fn block_number_request() -> Self;

    /// Creates a request for `eth_chainId`.
    fn chain_id_request() -> Self;
}

/// A client for executing RPC methods on a remote Ethereum node.
///
/// Responses are never cached and failed requests are not retried.
#[derive(Debug)]
pub struct RpcClient<MethodT: RpcMethod + Serialize> {
    url: url::Url,
    client: HttpClient,
    next_id: AtomicU64,
    _phantom: PhantomData<fn() -> MethodT>,
}

impl<MethodT: RpcMethod + Serialize> RpcClient<MethodT> {
    /// Create a new instance, given a remote node URL.
    pub fn new(url: &str) -> Result<Self, RpcClientError> {
        let url: url::Url = url.parse()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RpcClientError::UnsupportedUrlScheme {
                scheme: url.scheme().to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.append(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| RpcClientError::HttpClientUnavailable(error.into()))?;

        Ok(RpcClient {
            url,
            client,
            next_id: AtomicU64::new(0),
            _phantom: PhantomData,
        })
    }

    fn parse_response_str<SuccessT: DeserializeOwned>(
        response: String,
    ) -> Result<jsonrpc::Response<SuccessT>, RpcClientError> {
        serde_json::from_str(&response).map_err(|error| RpcClientError::InvalidResponse {
            response,
            expected_type: std::any::type_name::<jsonrpc::Response<SuccessT>>(),
            error,
        })
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    async fn send_request_body(
        &self,
        request_body: &SerializedRequest,
    ) -> Result<String, RpcClientError> {
        self.client
            .post(self.url.clone())
            .body(request_body.to_json_string())
            .send()
            .await
            .map_err(|err| RpcClientError::FailedToSend(err.into()))?
            .error_for_status()
            .map_err(|err| RpcClientError::HttpStatus(err.into()))?
            .text()
            .await
            .map_err(|err| RpcClientError::CorruptedResponse(err.into()))
    }

    fn serialize_request(&self, input: &MethodT) -> Result<SerializedRequest, RpcClientError> {
        let id = jsonrpc::Id::Num(self.next_id.fetch_add(1, Ordering::Relaxed));
        Self::serialize_request_with_id(input, id)
    }

    fn serialize_request_with_id(
        method: &MethodT,
        id: jsonrpc::Id,
    ) -> Result<SerializedRequest, RpcClientError> {
        let request = serde_json::to_value(jsonrpc::Request {
            version: jsonrpc::Version::V2_0,
            id,
            method,
        })
        .map_err(RpcClientError::InvalidJsonRequest)?;

        Ok(SerializedRequest(request))
    }

    /// Calls the provided JSON-RPC method and returns the result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, fields(method = method.name()))
    )]
    pub async fn call<SuccessT: DeserializeOwned>(
        &self,
        method: MethodT,
    ) -> Result<SuccessT, RpcClientError> {
        let request = self.serialize_request(&method)?;

        let response = self
            .send_request_body(&request)
            .await
            .and_then(Self::parse_response_str::<SuccessT>)?;

        response
            .data
            .into_result()
            .map_err(|error| RpcClientError::JsonRpcError {
                error,
                request: request.to_json_string(),
            })
    }

    /// Calls `eth_blockNumber` and returns the block number.
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        self.call::<U64>(MethodT::block_number_request())
            .await
            .map(|block_number| block_number.to::<u64>())
    }

    /// Calls `eth_chainId` and returns the chain ID.
    pub async fn chain_id(&self) -> Result<u64, RpcClientError> {
        self.call::<U64>(MethodT::chain_id_request())
            .await
            .map(|chain_id| chain_id.to::<u64>())
    }
}

#[derive(Debug, Clone)]
#[repr(transparent)]
struct SerializedRequest(serde_json::Value);

impl SerializedRequest {
    fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}
