use serde::{Deserialize, Serialize};

use super::common::NamedApiResource;

/// An evolution chain (`/evolution-chain/{id}/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: i32,
    pub baby_trigger_item: Option<NamedApiResource>,
    pub chain: ChainLink,
}

/// One node of the raw evolution tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    pub is_baby: bool,
    pub species: NamedApiResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Conditions for evolving into the node that carries this detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub item: Option<NamedApiResource>,
    pub trigger: NamedApiResource,
    pub gender: Option<i32>,
    pub held_item: Option<NamedApiResource>,
    pub known_move: Option<NamedApiResource>,
    pub known_move_type: Option<NamedApiResource>,
    pub location: Option<NamedApiResource>,
    pub min_level: Option<i32>,
    pub min_happiness: Option<i32>,
    pub min_beauty: Option<i32>,
    pub min_affection: Option<i32>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    pub party_species: Option<NamedApiResource>,
    pub party_type: Option<NamedApiResource>,
    pub relative_physical_stats: Option<i32>,
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub turn_upside_down: bool,
}
