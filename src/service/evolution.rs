//! Evolution chain flattening.
//!
//! Maps the raw evolution tree onto [`EvolutionNode`]s of the same shape: species and
//! reference-typed trigger conditions are reduced to their names, and a node without
//! further evolutions gets an empty `evolves_to` list. Pure, no I/O.

use crate::{
    error::resolve::ResolveError,
    model::{
        api::{
            evolution::{ChainLink, EvolutionChain, EvolutionDetail as RawEvolutionDetail},
            NamedApiResource,
        },
        record::{EvolutionChainRecord, EvolutionDetail, EvolutionNode},
    },
};

/// Flattens a fetched evolution chain.
///
/// # Arguments
/// - `chain` - Raw evolution chain payload
/// - `max_depth` - Deepest tree accepted, counting the root as level 1
///
/// # Returns
/// - `Ok(EvolutionChainRecord)` - The flattened chain
/// - `Err(ResolveError::EvolutionDepthExceeded)` - The tree is deeper than `max_depth`,
///   which also guards against cyclic payloads
pub fn flatten_chain(
    chain: &EvolutionChain,
    max_depth: usize,
) -> Result<EvolutionChainRecord, ResolveError> {
    let root = flatten(&chain.chain, max_depth).map_err(|_| {
        ResolveError::EvolutionDepthExceeded {
            chain_id: chain.id,
            max_depth,
        }
    })?;

    Ok(EvolutionChainRecord {
        id: chain.id,
        baby_trigger_item: name_of(&chain.baby_trigger_item),
        chain: root,
    })
}

/// Flattens one raw node and everything below it.
pub fn flatten(link: &ChainLink, max_depth: usize) -> Result<EvolutionNode, DepthExceeded> {
    flatten_at(link, 1, max_depth)
}

/// Marker error for a tree nested deeper than the allowed maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthExceeded;

fn flatten_at(
    link: &ChainLink,
    depth: usize,
    max_depth: usize,
) -> Result<EvolutionNode, DepthExceeded> {
    if depth > max_depth {
        return Err(DepthExceeded);
    }

    let evolves_to = link
        .evolves_to
        .iter()
        .map(|child| flatten_at(child, depth + 1, max_depth))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EvolutionNode {
        is_baby: link.is_baby,
        species: link.species.name.clone(),
        evolution_details: link.evolution_details.iter().map(flatten_detail).collect(),
        evolves_to,
    })
}

fn flatten_detail(detail: &RawEvolutionDetail) -> EvolutionDetail {
    EvolutionDetail {
        item: name_of(&detail.item),
        gender: detail.gender,
        held_item: name_of(&detail.held_item),
        known_move: name_of(&detail.known_move),
        known_move_type: name_of(&detail.known_move_type),
        location: name_of(&detail.location),
        min_level: detail.min_level,
        min_happiness: detail.min_happiness,
        min_beauty: detail.min_beauty,
        min_affection: detail.min_affection,
        needs_overworld_rain: detail.needs_overworld_rain,
        party_species: name_of(&detail.party_species),
        party_type: name_of(&detail.party_type),
        relative_physical_stats: detail.relative_physical_stats,
        time_of_day: detail.time_of_day.clone(),
        turn_upside_down: detail.turn_upside_down,
        trigger: detail.trigger.name.clone(),
    }
}

fn name_of(reference: &Option<NamedApiResource>) -> Option<String> {
    reference.as_ref().map(|r| r.name.clone())
}
