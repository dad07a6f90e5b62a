use thiserror::Error;

/// Failure of a GET against the remote API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connection refused, reset, timeout).
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// The body was not valid JSON or did not match the expected payload shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Every attempt of the retry budget failed; `last` is the final attempt's error.
    #[error("Giving up on {url} after {attempts} attempts: {last}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::Decode { url, .. }
            | Self::RetriesExhausted { url, .. } => url,
        }
    }
}
