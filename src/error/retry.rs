use crate::{config::RetryPolicy, error::fetch::FetchError};

/// Strategy for handling a failed attempt in a retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Wait for the retry delay and try again
    Retry,
    /// Failed permanently, return the error to the caller
    Fail,
}

impl FetchError {
    /// Determine the retry strategy for this error under the configured policy
    pub fn to_retry_strategy(&self, policy: RetryPolicy) -> ErrorRetryStrategy {
        match policy {
            // Baseline: any failure of the GET itself is retried until the budget runs out
            RetryPolicy::All => match self {
                Self::RetriesExhausted { .. } => ErrorRetryStrategy::Fail,
                _ => ErrorRetryStrategy::Retry,
            },
            RetryPolicy::Transient => match self {
                Self::Request { source, .. } => {
                    if source.is_builder() || source.is_redirect() {
                        ErrorRetryStrategy::Fail
                    } else {
                        // Connection refused/reset, timeouts, truncated bodies
                        ErrorRetryStrategy::Retry
                    }
                }
                Self::Status { status, .. } => match status {
                    // 429 - Too Many Requests
                    429 => ErrorRetryStrategy::Retry,
                    // 500 - Server errors, the API is temporarily unavailable
                    s if *s >= 500 => ErrorRetryStrategy::Retry,
                    // 400 - Client errors won't resolve by asking again
                    _ => ErrorRetryStrategy::Fail,
                },
                Self::Decode { .. } => ErrorRetryStrategy::Fail,
                Self::RetriesExhausted { .. } => ErrorRetryStrategy::Fail,
            },
        }
    }
}
