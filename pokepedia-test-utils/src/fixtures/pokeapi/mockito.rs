//! Mock PokeAPI endpoints.
//!
//! `create_*` methods return the mock, `with_*` methods keep it in
//! [`TestSetup::mocks`](crate::TestSetup) for [`assert_mocks`](crate::TestSetup::assert_mocks).

use std::collections::BTreeSet;

use mockito::{Matcher, Mock};
use serde_json::Value;

use super::{MockSpecies, PokeApiFixtures};

impl<'a> PokeApiFixtures<'a> {
    /// Create a mock GET endpoint at `path` answering `body` as JSON.
    pub fn create_json_endpoint(&mut self, path: &str, body: &Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock GET endpoint at `path` that always answers `status`.
    pub fn create_failing_endpoint(&mut self, path: &str, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .with_body("{\"detail\":\"unavailable\"}")
            .expect(expected_requests)
            .create()
    }

    fn keep(&mut self, mock: Mock) {
        self.setup.mocks.push(mock);
    }

    /// Catalog listing at `/pokemon-species/?limit={limit}` returning `species` in order.
    pub fn with_catalog_endpoint(&mut self, species: &[&MockSpecies], limit: u32, expected_requests: usize) {
        let body = self.catalog_payload(species);
        let mock = self
            .setup
            .server
            .mock("GET", "/pokemon-species/")
            .match_query(Matcher::UrlEncoded("limit".into(), limit.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();
        self.keep(mock);
    }

    /// Species, default variety and evolution chain endpoints of `species`.
    pub fn with_species_endpoints(&mut self, species: &MockSpecies, expected_requests: usize) {
        let body = self.species_payload(species);
        let mock = self.create_json_endpoint(&species.species_path(), &body, expected_requests);
        self.keep(mock);

        let body = self.pokemon_payload(species);
        let mock = self.create_json_endpoint(&species.pokemon_path(), &body, expected_requests);
        self.keep(mock);

        let body = self.evolution_chain_payload(species);
        let mock = self.create_json_endpoint(&species.chain_path(), &body, expected_requests);
        self.keep(mock);
    }

    /// Endpoints for every shared resource referenced by `species`, each registered once
    /// and expected to be requested exactly `expected_requests` times in total.
    pub fn with_reference_endpoints(&mut self, species: &[&MockSpecies], expected_requests: usize) {
        let mut moves = BTreeSet::new();
        let mut abilities = BTreeSet::new();
        let mut growth_rates = BTreeSet::new();
        let mut egg_groups = BTreeSet::new();
        let mut items = BTreeSet::new();
        let mut shapes = BTreeSet::new();

        for s in species {
            moves.extend(s.moves.iter().map(|(m, _)| m.clone()));
            abilities.extend(s.abilities.iter().map(|(a, _, _)| a.clone()));
            growth_rates.insert(s.growth_rate.clone());
            egg_groups.extend(s.egg_groups.iter().cloned());
            items.extend(s.held_items.iter().cloned());
            shapes.extend(s.shape.iter().cloned());
        }

        for slug in &moves {
            self.with_move_endpoint(slug, expected_requests);
        }
        for slug in &abilities {
            let body = self.ability_payload(slug);
            let mock = self.create_json_endpoint(&format!("/ability/{slug}/"), &body, expected_requests);
            self.keep(mock);
        }
        for slug in &growth_rates {
            let body = self.growth_rate_payload(slug);
            let mock = self.create_json_endpoint(&format!("/growth-rate/{slug}/"), &body, expected_requests);
            self.keep(mock);
        }
        for slug in &egg_groups {
            let body = self.egg_group_payload(slug);
            let mock = self.create_json_endpoint(&format!("/egg-group/{slug}/"), &body, expected_requests);
            self.keep(mock);
        }
        for slug in &items {
            let body = self.item_payload(slug);
            let mock = self.create_json_endpoint(&format!("/item/{slug}/"), &body, expected_requests);
            self.keep(mock);
        }
        for slug in &shapes {
            let body = self.shape_payload(slug);
            let mock = self.create_json_endpoint(&format!("/pokemon-shape/{slug}/"), &body, expected_requests);
            self.keep(mock);
        }
    }

    pub fn with_move_endpoint(&mut self, slug: &str, expected_requests: usize) {
        let body = self.move_payload(slug);
        let mock = self.create_json_endpoint(&format!("/move/{slug}/"), &body, expected_requests);
        self.keep(mock);
    }

    /// Replace a JSON endpoint with one that always fails with `status`.
    pub fn with_failing_endpoint(&mut self, path: &str, status: usize, expected_requests: usize) {
        let mock = self.create_failing_endpoint(path, status, expected_requests);
        self.keep(mock);
    }

    /// Species and variety endpoints of `species` with an evolution chain that always
    /// fails with `status`.
    pub fn with_species_endpoints_failing_chain(
        &mut self,
        species: &MockSpecies,
        status: usize,
        chain_requests: usize,
    ) {
        let body = self.species_payload(species);
        let mock = self.create_json_endpoint(&species.species_path(), &body, 1);
        self.keep(mock);

        let body = self.pokemon_payload(species);
        let mock = self.create_json_endpoint(&species.pokemon_path(), &body, 1);
        self.keep(mock);

        self.with_failing_endpoint(&species.chain_path(), status, chain_requests);
    }
}
