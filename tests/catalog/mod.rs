use std::time::Duration;

use pokepedia::{
    config::{FetchConfig, ResolverConfig},
    service::fetch::{Fetcher, HttpTransport},
};
use pokepedia_test_utils::prelude::*;

mod listing;
mod run;

static CATALOG_LIMIT: u32 = 100;

/// Fetcher with `max_attempts` attempts and no delay between them
fn fetcher(max_attempts: u32) -> Fetcher<HttpTransport> {
    let config = FetchConfig {
        max_attempts,
        retry_delay: Duration::ZERO,
        ..FetchConfig::default()
    };

    Fetcher::new(HttpTransport::new(reqwest::Client::new()), &config)
}

fn catalog_url(test: &TestSetup) -> String {
    format!("{}/pokemon-species/?limit={}", test.api_url(), CATALOG_LIMIT)
}

fn resolver_config() -> ResolverConfig {
    ResolverConfig::default()
}
