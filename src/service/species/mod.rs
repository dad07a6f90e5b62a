//! Resolution of one catalog entry into a [`SpeciesRecord`].
//!
//! Fetches the species, its default variety and its evolution chain directly, resolves
//! every shared sub-resource through the run's [`ReferenceCaches`], flattens the
//! evolution tree and assembles the denormalized record. All fetches are sequential.

mod derive;
mod reference;

#[cfg(test)]
mod tests;

pub use derive::{default_variety, derive_typing};

use crate::{
    config::ResolverConfig,
    error::Error,
    model::{
        api::{
            evolution::EvolutionChain, pokemon::Pokemon, species::CatalogEntry,
            species::PokemonSpecies,
        },
        record::{SpeciesRecord, Stat},
    },
    service::{
        cache::ReferenceCaches,
        evolution::flatten_chain,
        fetch::{Fetcher, HttpTransport, Transport},
    },
    util::{
        locale::{normalize_flavor_text, select_localized},
        resource::parse_generation,
    },
};

/// Resolver for single species, borrowing the run's fetcher and settings.
pub struct SpeciesResolver<'a, T = HttpTransport> {
    fetcher: &'a Fetcher<T>,
    config: &'a ResolverConfig,
}

impl<'a, T: Transport> SpeciesResolver<'a, T> {
    pub fn new(fetcher: &'a Fetcher<T>, config: &'a ResolverConfig) -> Self {
        Self { fetcher, config }
    }

    fn language(&self) -> &str {
        &self.config.target_language
    }

    /// Resolves `entry` into its denormalized record.
    ///
    /// Fetch order: species, default variety, evolution chain, then the cached references
    /// (moves, abilities, growth rate, egg groups, held items, shape).
    ///
    /// # Arguments
    /// - `entry` - Catalog reference to the species resource
    /// - `caches` - Reference caches of the current run, populated on misses
    ///
    /// # Returns
    /// - `Ok(SpeciesRecord)` - The assembled record
    /// - `Err(Error::FetchError)` - A required or cached fetch exhausted its retries
    /// - `Err(Error::ResolveError)` - A payload is missing data the record requires
    pub async fn resolve(
        &self,
        entry: &CatalogEntry,
        caches: &mut ReferenceCaches,
    ) -> Result<SpeciesRecord, Error> {
        let species: PokemonSpecies = self.fetcher.fetch_json(&entry.url).await?;

        let variety = default_variety(&species)?;
        let pokemon: Pokemon = self.fetcher.fetch_json(&variety.pokemon.url).await?;

        let chain: EvolutionChain = self
            .fetcher
            .fetch_json(&species.evolution_chain.url)
            .await?;

        let moves = self.resolve_moves(&pokemon, &mut caches.moves).await?;
        let abilities = self
            .resolve_abilities(&pokemon, &mut caches.abilities)
            .await?;
        let growth_rate = self
            .resolve_growth_rate(&species, &mut caches.growth_rates)
            .await?;
        let egg_groups = self
            .resolve_egg_groups(&species, &mut caches.egg_groups)
            .await?;
        let held_items = self
            .resolve_held_items(&pokemon, &mut caches.held_items)
            .await?;
        let shape = self.resolve_shape(&species, &mut caches.shapes).await?;

        let evolution_chain = flatten_chain(&chain, self.config.evolution_max_depth)?;

        tracing::info!("Loaded all endpoints for {}", species.name);

        let resource = format!("pokemon-species/{}", species.name);
        let name = select_localized(&species.names, self.language(), &resource, "names")?;
        let genus = select_localized(&species.genera, self.language(), &resource, "genera")?;
        let pokedex_entry = select_localized(
            &species.flavor_text_entries,
            self.language(),
            &resource,
            "flavor_text_entries",
        )?;

        Ok(SpeciesRecord {
            name: name.name.clone(),
            sprites: pokemon.sprites.clone(),
            id: species.id,
            typing: derive_typing(&pokemon)?,
            genus: genus.genus.clone(),
            height: pokemon.height,
            weight: pokemon.weight,
            abilities,
            base_experience: pokemon.base_experience,
            growth_rate,
            egg_groups,
            gender_rate: species.gender_rate,
            egg_cycles: species.hatch_counter,
            generation: parse_generation(&species.generation.url)?,
            stats: pokemon
                .stats
                .iter()
                .map(|s| Stat {
                    base_stat: s.base_stat,
                    effort: s.effort,
                    name: s.stat.name.clone(),
                })
                .collect(),
            evolution_chain,
            held_items,
            moves,
            pokedex_entry: normalize_flavor_text(&pokedex_entry.flavor_text),
            shape,
        })
    }
}
