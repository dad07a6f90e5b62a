use serde::{Deserialize, Serialize};

use super::common::NamedApiResource;

/// A species variety (`/pokemon/{id}/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub base_experience: Option<i32>,
    pub sprites: Sprites,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<PokemonAbility>,
    pub moves: Vec<PokemonMove>,
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub held_items: Vec<PokemonHeldItem>,
}

/// Default sprite URLs; the nested `other`/`versions` sets are not ingested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: i32,
    #[serde(rename = "type")]
    pub type_ref: NamedApiResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: i32,
    pub ability: NamedApiResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_ref: NamedApiResource,
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub level_learned_at: i32,
    pub move_learn_method: Option<NamedApiResource>,
    pub version_group: Option<NamedApiResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: i32,
    pub effort: i32,
    pub stat: NamedApiResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedApiResource,
}
