//! PokeAPI fixtures.
//!
//! A [`MockSpecies`] describes one species and the shared resources it references.
//! `data` turns it into payloads whose reference URLs point at the mock server, and
//! `mockito` registers the endpoints serving them.

pub mod data;
pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn pokeapi<'a>(&'a mut self) -> PokeApiFixtures<'a> {
        PokeApiFixtures { setup: self }
    }
}

pub struct PokeApiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

/// Description of a species served by the mock API.
///
/// Reference fields hold slugs; every slug resolves to an endpoint created by the
/// reference fixtures.
#[derive(Debug, Clone)]
pub struct MockSpecies {
    pub id: i32,
    pub slug: String,
    /// `(slot, type)` pairs in payload order
    pub types: Vec<(i32, String)>,
    /// `(slug, level_learned_at)` pairs in payload order
    pub moves: Vec<(String, i32)>,
    /// `(slug, is_hidden, slot)` triples in payload order
    pub abilities: Vec<(String, bool, i32)>,
    pub egg_groups: Vec<String>,
    pub held_items: Vec<String>,
    pub growth_rate: String,
    pub shape: Option<String>,
    pub generation_url_suffix: String,
    pub chain_id: i32,
    /// Species this one evolves into, as direct children of the chain root
    pub evolves_to: Vec<String>,
    /// Whether the variety list flags a default variety
    pub has_default_variety: bool,
}

impl MockSpecies {
    /// A grass/poison species learning `tackle` and `growl`, with abilities `overgrow`
    /// and hidden `chlorophyll`, in the `monster` and `plant` egg groups.
    pub fn new(id: i32, slug: &str) -> Self {
        Self {
            id,
            slug: slug.to_string(),
            types: vec![(1, "grass".to_string()), (2, "poison".to_string())],
            moves: vec![("tackle".to_string(), 1), ("growl".to_string(), 3)],
            abilities: vec![
                ("overgrow".to_string(), false, 1),
                ("chlorophyll".to_string(), true, 3),
            ],
            egg_groups: vec!["monster".to_string(), "plant".to_string()],
            held_items: Vec::new(),
            growth_rate: "medium-slow".to_string(),
            shape: Some("quadruped".to_string()),
            generation_url_suffix: "1/".to_string(),
            chain_id: id,
            evolves_to: Vec::new(),
            has_default_variety: true,
        }
    }

    pub fn with_moves(mut self, moves: &[(&str, i32)]) -> Self {
        self.moves = moves.iter().map(|(m, l)| (m.to_string(), *l)).collect();
        self
    }

    pub fn with_types(mut self, types: &[(i32, &str)]) -> Self {
        self.types = types.iter().map(|(s, t)| (*s, t.to_string())).collect();
        self
    }

    pub fn with_held_items(mut self, items: &[&str]) -> Self {
        self.held_items = items.iter().map(|i| i.to_string()).collect();
        self
    }

    pub fn with_shape(mut self, shape: Option<&str>) -> Self {
        self.shape = shape.map(str::to_string);
        self
    }

    pub fn with_growth_rate(mut self, growth_rate: &str) -> Self {
        self.growth_rate = growth_rate.to_string();
        self
    }

    pub fn with_generation_url_suffix(mut self, suffix: &str) -> Self {
        self.generation_url_suffix = suffix.to_string();
        self
    }

    pub fn with_chain(mut self, chain_id: i32, evolves_to: &[&str]) -> Self {
        self.chain_id = chain_id;
        self.evolves_to = evolves_to.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn without_default_variety(mut self) -> Self {
        self.has_default_variety = false;
        self
    }

    /// English display name of the species, e.g. `mr-mime` -> `Mr Mime`.
    pub fn display_name(&self) -> String {
        display_name(&self.slug)
    }

    pub fn species_path(&self) -> String {
        format!("/pokemon-species/{}/", self.id)
    }

    pub fn pokemon_path(&self) -> String {
        format!("/pokemon/{}/", self.id)
    }

    pub fn chain_path(&self) -> String {
        format!("/evolution-chain/{}/", self.chain_id)
    }
}

/// Title-cased display name for a slug.
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
