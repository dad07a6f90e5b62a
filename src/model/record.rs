use serde::{Deserialize, Serialize};

use crate::model::api::pokemon::Sprites;

/// Denormalized document persisted for one species.
///
/// Assembled from the species, its default variety and its evolution chain, with every
/// shared sub-resource replaced by its localized projection. List fields keep the order
/// of the source payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    pub sprites: Sprites,
    pub id: i32,
    #[serde(rename = "type")]
    pub typing: Typing,
    pub genus: String,
    pub height: i32,
    pub weight: i32,
    pub abilities: Vec<SpeciesAbility>,
    pub base_experience: Option<i32>,
    pub growth_rate: String,
    pub egg_groups: Vec<String>,
    /// Chance of being female in eighths, `-1` for genderless
    pub gender_rate: i32,
    pub egg_cycles: Option<i32>,
    pub generation: u32,
    pub stats: Vec<Stat>,
    pub evolution_chain: EvolutionChainRecord,
    pub held_items: Vec<HeldItem>,
    pub moves: Vec<LearnedMove>,
    pub pokedex_entry: String,
    pub shape: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typing {
    pub primary: String,
    pub secondary: Option<String>,
}

/// Cached projection of an ability resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDetails {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesAbility {
    #[serde(flatten)]
    pub details: AbilityDetails,
    pub is_hidden: bool,
    pub slot: i32,
}

/// Cached projection of a move resource, everything except the per-species level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDetails {
    pub name: String,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    pub accuracy: Option<i32>,
    pub pp: Option<i32>,
    pub power: Option<i32>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedMove {
    pub level: i32,
    #[serde(flatten)]
    pub details: MoveDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub base_stat: i32,
    pub effort: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainRecord {
    pub id: i32,
    pub baby_trigger_item: Option<String>,
    pub chain: EvolutionNode,
}

/// Flattened evolution tree node.
///
/// A node without further evolutions always carries an empty `evolves_to` list, never
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub is_baby: bool,
    pub species: String,
    pub evolution_details: Vec<EvolutionDetail>,
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn is_terminal(&self) -> bool {
        self.evolves_to.is_empty()
    }

    /// Number of levels in the subtree rooted at this node, counting the node itself.
    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(EvolutionNode::depth)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub item: Option<String>,
    pub gender: Option<i32>,
    pub held_item: Option<String>,
    pub known_move: Option<String>,
    pub known_move_type: Option<String>,
    pub location: Option<String>,
    pub min_level: Option<i32>,
    pub min_happiness: Option<i32>,
    pub min_beauty: Option<i32>,
    pub min_affection: Option<i32>,
    pub needs_overworld_rain: bool,
    pub party_species: Option<String>,
    pub party_type: Option<String>,
    pub relative_physical_stats: Option<i32>,
    pub time_of_day: String,
    pub turn_upside_down: bool,
    pub trigger: String,
}
