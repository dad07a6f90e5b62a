use crate::{
    error::resolve::ResolveError,
    model::{
        api::{
            pokemon::Pokemon,
            species::{PokemonSpecies, PokemonSpeciesVariety},
        },
        record::Typing,
    },
};

/// The variety flagged as default, which supplies physical, type and ability data.
pub fn default_variety(species: &PokemonSpecies) -> Result<&PokemonSpeciesVariety, ResolveError> {
    species
        .varieties
        .iter()
        .find(|v| v.is_default)
        .ok_or_else(|| ResolveError::DefaultVarietyMissing(species.name.clone()))
}

/// Primary and secondary type from the variety's type slots.
///
/// Slot 1 is primary and required, slot 2 is secondary when present. Type slots beyond
/// the second are ignored.
pub fn derive_typing(pokemon: &Pokemon) -> Result<Typing, ResolveError> {
    let type_in_slot = |slot: i32| {
        pokemon
            .types
            .iter()
            .find(|t| t.slot == slot)
            .map(|t| t.type_ref.name.clone())
    };

    let primary =
        type_in_slot(1).ok_or_else(|| ResolveError::MissingPrimaryType(pokemon.name.clone()))?;

    if pokemon.types.iter().any(|t| t.slot > 2) {
        tracing::warn!(
            "Ignoring type slots beyond the second for pokemon {}",
            pokemon.name
        );
    }

    Ok(Typing {
        primary,
        secondary: type_in_slot(2),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn pokemon_with_types(types: serde_json::Value) -> Pokemon {
        serde_json::from_value(json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "sprites": {},
            "types": types,
            "abilities": [],
            "moves": [],
            "stats": []
        }))
        .unwrap()
    }

    fn type_slot(slot: i32, name: &str) -> serde_json::Value {
        json!({
            "slot": slot,
            "type": { "name": name, "url": format!("https://pokeapi.co/api/v2/type/{name}/") }
        })
    }

    fn species_with_varieties(varieties: serde_json::Value) -> PokemonSpecies {
        serde_json::from_value(json!({
            "id": 413,
            "name": "wormadam",
            "names": [],
            "genera": [],
            "gender_rate": 8,
            "hatch_counter": 15,
            "growth_rate": { "name": "medium", "url": "https://pokeapi.co/api/v2/growth-rate/2/" },
            "egg_groups": [],
            "generation": { "name": "generation-iv", "url": "https://pokeapi.co/api/v2/generation/4/" },
            "shape": null,
            "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/213/" },
            "varieties": varieties,
            "flavor_text_entries": []
        }))
        .unwrap()
    }

    /// Slot order in the payload doesn't matter, slot numbers do
    #[test]
    fn primary_is_slot_one_regardless_of_order() {
        let pokemon = pokemon_with_types(json!([type_slot(2, "poison"), type_slot(1, "grass")]));

        let typing = derive_typing(&pokemon).unwrap();

        assert_eq!(typing.primary, "grass");
        assert_eq!(typing.secondary.as_deref(), Some("poison"));
    }

    #[test]
    fn single_type_has_no_secondary() {
        let pokemon = pokemon_with_types(json!([type_slot(1, "fire")]));

        let typing = derive_typing(&pokemon).unwrap();

        assert_eq!(typing.primary, "fire");
        assert_eq!(typing.secondary, None);
    }

    #[test]
    fn missing_slot_one_is_an_error() {
        let pokemon = pokemon_with_types(json!([type_slot(2, "flying")]));

        assert_eq!(
            derive_typing(&pokemon),
            Err(ResolveError::MissingPrimaryType("bulbasaur".to_string()))
        );
    }

    #[test]
    fn extra_slots_are_ignored() {
        let pokemon = pokemon_with_types(json!([
            type_slot(1, "water"),
            type_slot(2, "ground"),
            type_slot(3, "rock")
        ]));

        let typing = derive_typing(&pokemon).unwrap();

        assert_eq!(typing.primary, "water");
        assert_eq!(typing.secondary.as_deref(), Some("ground"));
    }

    #[test]
    fn selects_variety_flagged_default() {
        let species = species_with_varieties(json!([
            { "is_default": false, "pokemon": { "name": "wormadam-sandy", "url": "https://pokeapi.co/api/v2/pokemon/10004/" } },
            { "is_default": true, "pokemon": { "name": "wormadam-plant", "url": "https://pokeapi.co/api/v2/pokemon/413/" } }
        ]));

        let variety = default_variety(&species).unwrap();

        assert_eq!(variety.pokemon.name, "wormadam-plant");
    }

    #[test]
    fn no_default_variety_is_an_error() {
        let species = species_with_varieties(json!([
            { "is_default": false, "pokemon": { "name": "wormadam-sandy", "url": "https://pokeapi.co/api/v2/pokemon/10004/" } }
        ]));

        assert_eq!(
            default_variety(&species).map(|v| v.pokemon.name.clone()),
            Err(ResolveError::DefaultVarietyMissing("wormadam".to_string()))
        );
    }
}
