//! Environment-driven configuration for the ingestion job.

use std::{str::FromStr, time::Duration};

use crate::error::config::ConfigError;

static DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";
static DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Which failed attempts the fetcher retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Retry every failure of the GET until the attempt budget runs out.
    #[default]
    All,
    /// Retry only connection errors, timeouts, HTTP 429 and HTTP 5xx.
    Transient,
}

impl FromStr for RetryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "transient" => Ok(Self::Transient),
            other => Err(format!("expected \"all\" or \"transient\", got {other:?}")),
        }
    }
}

/// Settings for the retrying fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub retry_policy: RetryPolicy,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            retry_delay: Duration::from_secs(10),
            retry_policy: RetryPolicy::All,
            user_agent: default_user_agent(),
        }
    }
}

/// Settings for resolving a single species.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Language tag every localized name, description and flavor text is filtered by.
    pub target_language: String,
    /// Maximum nesting of an evolution chain before it is treated as malformed.
    pub evolution_max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            evolution_max_depth: 32,
        }
    }
}

pub struct Config {
    /// Base URL of the API, without a trailing slash
    pub api_url: String,
    pub database_url: String,
    /// `limit` passed to the single catalog listing request
    pub catalog_limit: u32,
    pub fetch: FetchConfig,
    pub resolver: ResolverConfig,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Only `DATABASE_URL` is required, everything else falls back to the defaults used
    /// against the public PokeAPI.
    pub fn from_env() -> Result<Self, ConfigError> {
        let fetch_defaults = FetchConfig::default();
        let resolver_defaults = ResolverConfig::default();

        let max_attempts = parse_nonzero_var("FETCH_MAX_ATTEMPTS", fetch_defaults.max_attempts)?;

        let retry_delay_ms = parse_var(
            "FETCH_RETRY_DELAY_MS",
            fetch_defaults.retry_delay.as_millis() as u64,
        )?;

        Ok(Self {
            api_url: optional_var("POKEAPI_URL")
                .unwrap_or_else(|| DEFAULT_POKEAPI_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            database_url: required_var("DATABASE_URL")?,
            catalog_limit: parse_var("CATALOG_LIMIT", 100_000)?,
            fetch: FetchConfig {
                max_attempts,
                retry_delay: Duration::from_millis(retry_delay_ms),
                retry_policy: parse_var("FETCH_RETRY_POLICY", fetch_defaults.retry_policy)?,
                user_agent: optional_var("USER_AGENT").unwrap_or(fetch_defaults.user_agent),
            },
            resolver: ResolverConfig {
                target_language: optional_var("TARGET_LANGUAGE")
                    .unwrap_or(resolver_defaults.target_language),
                evolution_max_depth: parse_nonzero_var(
                    "EVOLUTION_MAX_DEPTH",
                    resolver_defaults.evolution_max_depth,
                )?,
            },
        })
    }

    /// URL of the catalog listing endpoint.
    pub fn catalog_url(&self) -> String {
        format!("{}/pokemon-species/?limit={}", self.api_url, self.catalog_limit)
    }
}

fn default_user_agent() -> String {
    format!("pokepedia/{}", env!("CARGO_PKG_VERSION"))
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_var<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

/// Like [`parse_var`], rejecting `0`.
fn parse_nonzero_var<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + From<u8>,
    T::Err: std::fmt::Display,
{
    let value = parse_var(var, default)?;
    if value == T::from(0) {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_retry_policy() {
        assert_eq!("all".parse::<RetryPolicy>(), Ok(RetryPolicy::All));
        assert_eq!(" Transient ".parse::<RetryPolicy>(), Ok(RetryPolicy::Transient));
        assert!("sometimes".parse::<RetryPolicy>().is_err());
    }

    #[test]
    fn defaults_match_public_api_behaviour() {
        let fetch = FetchConfig::default();
        assert_eq!(fetch.max_attempts, 10);
        assert_eq!(fetch.retry_delay, Duration::from_secs(10));
        assert_eq!(fetch.retry_policy, RetryPolicy::All);

        let resolver = ResolverConfig::default();
        assert_eq!(resolver.target_language, "en");
    }

    #[test]
    fn parse_var_reports_variable_name() {
        // Unique name so parallel tests don't race on the process environment
        let var = "POKEPEDIA_TEST_PARSE_VAR_INVALID";
        std::env::set_var(var, "ten");

        let result = parse_var::<u32>(var, 1);

        std::env::remove_var(var);
        match result {
            Err(ConfigError::InvalidEnvValue { var: name, .. }) => assert_eq!(name, var),
            other => panic!("expected InvalidEnvValue, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn zero_depth_is_rejected() {
        let var = "POKEPEDIA_TEST_NONZERO_DEPTH";
        std::env::set_var(var, "0");

        let result = parse_nonzero_var::<usize>(var, 32);

        std::env::remove_var(var);
        match result {
            Err(ConfigError::InvalidEnvValue { var: name, reason }) => {
                assert_eq!(name, var);
                assert_eq!(reason, "must be at least 1");
            }
            other => panic!("expected InvalidEnvValue, got {:?}", other),
        }
    }

    #[test]
    fn nonzero_value_is_accepted() {
        let var = "POKEPEDIA_TEST_NONZERO_ATTEMPTS";
        std::env::set_var(var, "3");

        let result = parse_nonzero_var::<u32>(var, 10);

        std::env::remove_var(var);
        assert_eq!(result.ok(), Some(3));
    }
}
