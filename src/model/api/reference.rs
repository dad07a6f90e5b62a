//! Shared sub-resources referenced by many species, resolved through the reference caches.

use serde::{Deserialize, Serialize};

use super::common::{Description, FlavorText, Name, NamedApiResource, VersionGroupFlavorText};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub names: Vec<Name>,
    pub damage_class: Option<NamedApiResource>,
    #[serde(rename = "type")]
    pub type_ref: NamedApiResource,
    pub accuracy: Option<i32>,
    pub pp: Option<i32>,
    pub power: Option<i32>,
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub names: Vec<Name>,
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthRate {
    pub name: String,
    pub descriptions: Vec<Description>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EggGroup {
    pub name: String,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub names: Vec<Name>,
    pub flavor_text_entries: Vec<VersionGroupFlavorText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonShape {
    pub name: String,
    pub names: Vec<Name>,
}
