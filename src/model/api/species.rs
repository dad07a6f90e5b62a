use serde::{Deserialize, Serialize};

use super::common::{ApiResource, FlavorText, Genus, Name, NamedApiResource};

/// Response of the catalog listing endpoint (`/pokemon-species/?limit=N`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub count: u32,
    pub results: Vec<CatalogEntry>,
}

/// Reference to one species resource in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: i32,
    pub name: String,
    pub names: Vec<Name>,
    pub genera: Vec<Genus>,
    pub gender_rate: i32,
    pub hatch_counter: Option<i32>,
    pub growth_rate: NamedApiResource,
    pub egg_groups: Vec<NamedApiResource>,
    pub generation: NamedApiResource,
    pub shape: Option<NamedApiResource>,
    pub evolution_chain: ApiResource,
    pub varieties: Vec<PokemonSpeciesVariety>,
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSpeciesVariety {
    pub is_default: bool,
    pub pokemon: NamedApiResource,
}
