//! PokeAPI payload builders.
//!
//! Localized lists always put a Japanese entry before the English one so language
//! filtering is exercised, and multi-line texts contain hard line breaks.

use serde_json::{json, Value};

use super::{display_name, MockSpecies, PokeApiFixtures};

/// English description served for every move, ability and item.
pub fn mock_description(slug: &str) -> String {
    format!("Description of {slug}. Second line.")
}

pub fn mock_growth_rate_description(slug: &str) -> String {
    format!("{} growth", display_name(slug))
}

pub fn mock_pokedex_entry(slug: &str) -> String {
    format!("{} lives in tall grass. It is often seen at dawn.", display_name(slug))
}

/// Raw text of [`mock_description`] as the API serves it, with a hard line break.
fn raw_description(slug: &str) -> String {
    format!("Description of {slug}.\nSecond line.")
}

fn language(tag: &str) -> Value {
    json!({ "name": tag, "url": format!("https://pokeapi.co/api/v2/language/{tag}/") })
}

fn localized_names(slug: &str) -> Value {
    json!([
        { "name": format!("{slug}-ja"), "language": language("ja") },
        { "name": display_name(slug), "language": language("en") }
    ])
}

fn localized_flavor_texts(text: &str) -> Value {
    json!([
        { "flavor_text": "日本語のテキスト", "language": language("ja") },
        { "flavor_text": text, "language": language("en") },
        { "flavor_text": "Older English text", "language": language("en") }
    ])
}

impl<'a> PokeApiFixtures<'a> {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.setup.api_url(), path)
    }

    fn resource(&self, kind: &str, slug: &str) -> Value {
        json!({ "name": slug, "url": self.url(&format!("/{kind}/{slug}/")) })
    }

    /// Catalog listing payload for `species`, in the given order.
    pub fn catalog_payload(&self, species: &[&MockSpecies]) -> Value {
        let results: Vec<Value> = species
            .iter()
            .map(|s| json!({ "name": s.slug, "url": self.url(&s.species_path()) }))
            .collect();

        json!({
            "count": results.len(),
            "next": null,
            "previous": null,
            "results": results
        })
    }

    pub fn species_payload(&self, species: &MockSpecies) -> Value {
        let variety = json!({
            "is_default": species.has_default_variety,
            "pokemon": { "name": species.slug, "url": self.url(&species.pokemon_path()) }
        });
        let egg_groups: Vec<Value> = species
            .egg_groups
            .iter()
            .map(|e| self.resource("egg-group", e))
            .collect();

        json!({
            "id": species.id,
            "name": species.slug,
            "order": species.id,
            "names": localized_names(&species.slug),
            "genera": [
                { "genus": "たねポケモン", "language": language("ja") },
                { "genus": "Seed Pokémon", "language": language("en") }
            ],
            "gender_rate": 1,
            "hatch_counter": 20,
            "growth_rate": self.resource("growth-rate", &species.growth_rate),
            "egg_groups": egg_groups,
            "generation": {
                "name": "generation-i",
                "url": self.url(&format!("/generation/{}", species.generation_url_suffix))
            },
            "shape": species.shape.as_ref().map(|s| self.resource("pokemon-shape", s)),
            "evolution_chain": { "url": self.url(&species.chain_path()) },
            "varieties": [variety],
            "flavor_text_entries": localized_flavor_texts(&format!(
                "{} lives in tall grass.\nIt is often seen\u{c}at dawn.",
                display_name(&species.slug)
            ))
        })
    }

    pub fn pokemon_payload(&self, species: &MockSpecies) -> Value {
        let types: Vec<Value> = species
            .types
            .iter()
            .map(|(slot, name)| json!({ "slot": slot, "type": self.resource("type", name) }))
            .collect();
        let abilities: Vec<Value> = species
            .abilities
            .iter()
            .map(|(slug, is_hidden, slot)| {
                json!({
                    "is_hidden": is_hidden,
                    "slot": slot,
                    "ability": self.resource("ability", slug)
                })
            })
            .collect();
        let moves: Vec<Value> = species
            .moves
            .iter()
            .map(|(slug, level)| {
                json!({
                    "move": self.resource("move", slug),
                    "version_group_details": [{
                        "level_learned_at": level,
                        "move_learn_method": self.resource("move-learn-method", "level-up"),
                        "version_group": self.resource("version-group", "red-blue")
                    }]
                })
            })
            .collect();
        let held_items: Vec<Value> = species
            .held_items
            .iter()
            .map(|slug| json!({ "item": self.resource("item", slug), "version_details": [] }))
            .collect();
        let sprite = |kind: &str| {
            format!(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{kind}{}.png",
                species.id
            )
        };

        json!({
            "id": species.id,
            "name": species.slug,
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "sprites": {
                "back_default": sprite("back/"),
                "back_female": null,
                "back_shiny": sprite("back/shiny/"),
                "back_shiny_female": null,
                "front_default": sprite(""),
                "front_female": null,
                "front_shiny": sprite("shiny/"),
                "front_shiny_female": null,
                "other": { "home": { "front_default": sprite("other/home/") } }
            },
            "types": types,
            "abilities": abilities,
            "moves": moves,
            "stats": [
                { "base_stat": 45, "effort": 0, "stat": self.resource("stat", "hp") },
                { "base_stat": 49, "effort": 0, "stat": self.resource("stat", "attack") },
                { "base_stat": 65, "effort": 1, "stat": self.resource("stat", "special-attack") }
            ],
            "held_items": held_items
        })
    }

    pub fn evolution_chain_payload(&self, species: &MockSpecies) -> Value {
        let evolves_to: Vec<Value> = species
            .evolves_to
            .iter()
            .map(|slug| {
                json!({
                    "is_baby": false,
                    "species": self.resource("pokemon-species", slug),
                    "evolution_details": [{
                        "item": null,
                        "trigger": self.resource("evolution-trigger", "level-up"),
                        "gender": null,
                        "held_item": null,
                        "known_move": null,
                        "known_move_type": null,
                        "location": null,
                        "min_level": 16,
                        "min_happiness": null,
                        "min_beauty": null,
                        "min_affection": null,
                        "needs_overworld_rain": false,
                        "party_species": null,
                        "party_type": null,
                        "relative_physical_stats": null,
                        "time_of_day": "",
                        "trade_species": null,
                        "turn_upside_down": false
                    }],
                    "evolves_to": []
                })
            })
            .collect();

        json!({
            "id": species.chain_id,
            "baby_trigger_item": null,
            "chain": {
                "is_baby": false,
                "species": self.resource("pokemon-species", &species.slug),
                "evolution_details": [],
                "evolves_to": evolves_to
            }
        })
    }

    pub fn move_payload(&self, slug: &str) -> Value {
        json!({
            "id": 33,
            "name": slug,
            "names": localized_names(slug),
            "accuracy": 100,
            "pp": 35,
            "power": 40,
            "damage_class": self.resource("move-damage-class", "physical"),
            "type": self.resource("type", "normal"),
            "flavor_text_entries": localized_flavor_texts(&raw_description(slug))
        })
    }

    pub fn ability_payload(&self, slug: &str) -> Value {
        json!({
            "id": 65,
            "name": slug,
            "names": localized_names(slug),
            "flavor_text_entries": localized_flavor_texts(&raw_description(slug))
        })
    }

    pub fn growth_rate_payload(&self, slug: &str) -> Value {
        json!({
            "id": 4,
            "name": slug,
            "formula": "\\frac{6x^3}{5} - 15x^2 + 100x - 140",
            "descriptions": [
                { "description": "lent puis rapide", "language": language("fr") },
                { "description": mock_growth_rate_description(slug), "language": language("en") }
            ]
        })
    }

    pub fn egg_group_payload(&self, slug: &str) -> Value {
        json!({ "id": 1, "name": slug, "names": localized_names(slug) })
    }

    pub fn item_payload(&self, slug: &str) -> Value {
        json!({
            "id": 1,
            "name": slug,
            "names": localized_names(slug),
            "flavor_text_entries": [
                { "text": "日本語のテキスト", "language": language("ja"), "version_group": self.resource("version-group", "x-y") },
                { "text": raw_description(slug), "language": language("en"), "version_group": self.resource("version-group", "x-y") }
            ]
        })
    }

    pub fn shape_payload(&self, slug: &str) -> Value {
        json!({ "id": 8, "name": slug, "names": localized_names(slug) })
    }
}
