use std::time::Duration;

use pokepedia_test_utils::{fixtures::pokeapi::data::*, prelude::*};

use crate::{
    config::{FetchConfig, ResolverConfig},
    error::{fetch::FetchError, resolve::ResolveError, Error},
    model::api::species::CatalogEntry,
    service::{
        cache::ReferenceCaches,
        fetch::{Fetcher, HttpTransport},
        species::SpeciesResolver,
    },
};


/// Fetcher retrying twice without a delay
fn fetcher() -> Fetcher<HttpTransport> {
    let config = FetchConfig {
        max_attempts: 2,
        retry_delay: Duration::ZERO,
        ..FetchConfig::default()
    };

    Fetcher::new(HttpTransport::new(reqwest::Client::new()), &config)
}

fn entry(test: &TestSetup, species: &MockSpecies) -> CatalogEntry {
    CatalogEntry {
        name: species.slug.clone(),
        url: format!("{}{}", test.api_url(), species.species_path()),
    }
}
