//! Retrying GET primitive for the remote API.
//!
//! [`Fetcher`] wraps a [`Transport`] with a bounded retry loop: a failed attempt waits a
//! fixed delay and tries again with one attempt less in the budget, and the final
//! failure is returned as [`FetchError::RetriesExhausted`] wrapping the last attempt's
//! error. There is no jitter and no exponential growth of the delay.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::{FetchConfig, RetryPolicy},
    error::{fetch::FetchError, retry::ErrorRetryStrategy},
};

/// A single GET returning a JSON payload.
///
/// Implemented by [`HttpTransport`] for the real API; tests substitute scripted
/// transports to count attempts.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// [`Transport`] over a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a transport with its own client sending `user_agent`.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| FetchError::Request {
                url: String::new(),
                source,
            })?;

        Ok(Self::new(client))
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// GET with a fixed retry budget and fixed delay between attempts.
pub struct Fetcher<T = HttpTransport> {
    transport: T,
    /// Total attempts per request, including the first
    max_attempts: u32,
    /// Delay between a failed attempt and the next one
    retry_delay: Duration,
    retry_policy: RetryPolicy,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, config: &FetchConfig) -> Self {
        Self {
            transport,
            max_attempts: config.max_attempts.max(1),
            retry_delay: config.retry_delay,
            retry_policy: config.retry_policy,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `url`, retrying failed attempts until the budget is exhausted.
    ///
    /// # Returns
    /// - `Ok(Value)` - Payload of the first successful attempt
    /// - `Err(FetchError::RetriesExhausted)` - Every attempt failed
    /// - `Err(FetchError)` - An attempt failed with an error the retry policy won't retry
    pub async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Fetching {} (attempt {}/{})",
                url,
                attempt_count + 1,
                self.max_attempts
            );

            let error = match self.transport.get(url).await {
                Ok(payload) => return Ok(payload),
                Err(e) => e,
            };

            attempt_count += 1;

            if self.retry_policy_for(&error) == ErrorRetryStrategy::Fail {
                tracing::error!("Permanent error fetching {}: {}", url, error);
                return Err(error);
            }

            if attempt_count >= self.max_attempts {
                tracing::error!(
                    "Max attempts ({}) exceeded fetching {}: {}",
                    self.max_attempts,
                    url,
                    error
                );
                return Err(FetchError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt_count,
                    last: Box::new(error),
                });
            }

            tracing::warn!(
                "Retrying {} (attempt {}/{}) after {:?}: {}",
                url,
                attempt_count,
                self.max_attempts,
                self.retry_delay,
                error
            );

            tokio::time::sleep(self.retry_delay).await;
        }
    }

    /// Fetches `url` and decodes the payload into `R`.
    ///
    /// A payload that doesn't decode is a [`FetchError::Decode`]; it is not retried.
    pub async fn fetch_json<R: DeserializeOwned>(&self, url: &str) -> Result<R, FetchError> {
        let payload = self.fetch(url).await?;

        serde_json::from_value(payload).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn retry_policy_for(&self, error: &FetchError) -> ErrorRetryStrategy {
        error.to_retry_strategy(self.retry_policy)
    }
}
