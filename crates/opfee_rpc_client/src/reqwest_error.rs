use std::fmt;

/// Wrapper around [`reqwest::Error`] that never displays the request URL.
///
/// Remote node URLs frequently embed API keys.
#[derive(Debug)]
pub struct ReqwestError(reqwest::Error);

impl fmt::Display for ReqwestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ReqwestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<reqwest::Error> for ReqwestError {
    fn from(error: reqwest::Error) -> Self {
        Self(error.without_url())
    }
}

impl From<ReqwestError> for reqwest::Error {
    fn from(error: ReqwestError) -> Self {
        error.0
    }
}
