use thiserror::Error;

/// Failure of a call to the analytics API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}
