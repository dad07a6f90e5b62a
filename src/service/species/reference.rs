use crate::{
    error::{resolve::ResolveError, Error},
    model::{
        api::{
            pokemon::Pokemon,
            reference::{Ability, EggGroup, GrowthRate, Item, Move, PokemonShape},
            species::PokemonSpecies,
        },
        record::{AbilityDetails, HeldItem, LearnedMove, MoveDetails, SpeciesAbility},
    },
    service::{cache::ReferenceCache, fetch::Transport},
    util::{
        locale::{normalize_flavor_text, select_localized},
        resource::reference_key,
    },
};

use super::SpeciesResolver;

impl<'a, T: Transport> SpeciesResolver<'a, T> {
    /// Moves of the variety in source order; `level` comes from the variety's first
    /// version group detail, the rest from the move cache.
    pub(super) async fn resolve_moves(
        &self,
        pokemon: &Pokemon,
        cache: &mut ReferenceCache<MoveDetails>,
    ) -> Result<Vec<LearnedMove>, Error> {
        let mut moves = Vec::with_capacity(pokemon.moves.len());

        for slot in &pokemon.moves {
            let reference = &slot.move_ref;
            let level = slot
                .version_group_details
                .first()
                .map(|d| d.level_learned_at)
                .ok_or_else(|| ResolveError::MissingMoveLearnDetails {
                    pokemon: pokemon.name.clone(),
                    move_name: reference.name.clone(),
                })?;

            let details = cache
                .resolve(reference_key(&reference.name, &reference.url), || {
                    self.load_move(&reference.url)
                })
                .await?;

            moves.push(LearnedMove { level, details });
        }

        Ok(moves)
    }

    /// Abilities of the variety in source order; `is_hidden` and `slot` are per variety.
    pub(super) async fn resolve_abilities(
        &self,
        pokemon: &Pokemon,
        cache: &mut ReferenceCache<AbilityDetails>,
    ) -> Result<Vec<SpeciesAbility>, Error> {
        let mut abilities = Vec::with_capacity(pokemon.abilities.len());

        for slot in &pokemon.abilities {
            let reference = &slot.ability;
            let details = cache
                .resolve(reference_key(&reference.name, &reference.url), || {
                    self.load_ability(&reference.url)
                })
                .await?;

            abilities.push(SpeciesAbility {
                details,
                is_hidden: slot.is_hidden,
                slot: slot.slot,
            });
        }

        Ok(abilities)
    }

    pub(super) async fn resolve_growth_rate(
        &self,
        species: &PokemonSpecies,
        cache: &mut ReferenceCache<String>,
    ) -> Result<String, Error> {
        let reference = &species.growth_rate;

        cache
            .resolve(reference_key(&reference.name, &reference.url), || {
                self.load_growth_rate(&reference.url)
            })
            .await
    }

    pub(super) async fn resolve_egg_groups(
        &self,
        species: &PokemonSpecies,
        cache: &mut ReferenceCache<String>,
    ) -> Result<Vec<String>, Error> {
        let mut egg_groups = Vec::with_capacity(species.egg_groups.len());

        for reference in &species.egg_groups {
            let name = cache
                .resolve(reference_key(&reference.name, &reference.url), || {
                    self.load_egg_group(&reference.url)
                })
                .await?;

            egg_groups.push(name);
        }

        Ok(egg_groups)
    }

    pub(super) async fn resolve_held_items(
        &self,
        pokemon: &Pokemon,
        cache: &mut ReferenceCache<HeldItem>,
    ) -> Result<Vec<HeldItem>, Error> {
        let mut held_items = Vec::with_capacity(pokemon.held_items.len());

        for slot in &pokemon.held_items {
            let reference = &slot.item;
            let item = cache
                .resolve(reference_key(&reference.name, &reference.url), || {
                    self.load_item(&reference.url)
                })
                .await?;

            held_items.push(item);
        }

        Ok(held_items)
    }

    /// Species without a shape upstream resolve to `None` without a fetch.
    pub(super) async fn resolve_shape(
        &self,
        species: &PokemonSpecies,
        cache: &mut ReferenceCache<String>,
    ) -> Result<Option<String>, Error> {
        let Some(reference) = &species.shape else {
            return Ok(None);
        };

        let name = cache
            .resolve(reference_key(&reference.name, &reference.url), || {
                self.load_shape(&reference.url)
            })
            .await?;

        Ok(Some(name))
    }

    async fn load_move(&self, url: &str) -> Result<MoveDetails, Error> {
        let data: Move = self.fetcher.fetch_json(url).await?;
        let resource = format!("move/{}", data.name);

        let name = select_localized(&data.names, self.language(), &resource, "names")?;
        let description = select_localized(
            &data.flavor_text_entries,
            self.language(),
            &resource,
            "flavor_text_entries",
        )?;

        Ok(MoveDetails {
            name: name.name.clone(),
            category: data.damage_class.map(|d| d.name),
            type_name: data.type_ref.name,
            accuracy: data.accuracy,
            pp: data.pp,
            power: data.power,
            description: normalize_flavor_text(&description.flavor_text),
        })
    }

    async fn load_ability(&self, url: &str) -> Result<AbilityDetails, Error> {
        let data: Ability = self.fetcher.fetch_json(url).await?;
        let resource = format!("ability/{}", data.name);

        let name = select_localized(&data.names, self.language(), &resource, "names")?;
        let description = select_localized(
            &data.flavor_text_entries,
            self.language(),
            &resource,
            "flavor_text_entries",
        )?;

        Ok(AbilityDetails {
            name: name.name.clone(),
            description: normalize_flavor_text(&description.flavor_text),
        })
    }

    async fn load_growth_rate(&self, url: &str) -> Result<String, Error> {
        let data: GrowthRate = self.fetcher.fetch_json(url).await?;
        let resource = format!("growth-rate/{}", data.name);

        let description =
            select_localized(&data.descriptions, self.language(), &resource, "descriptions")?;

        Ok(description.description.clone())
    }

    async fn load_egg_group(&self, url: &str) -> Result<String, Error> {
        let data: EggGroup = self.fetcher.fetch_json(url).await?;
        let resource = format!("egg-group/{}", data.name);

        let name = select_localized(&data.names, self.language(), &resource, "names")?;

        Ok(name.name.clone())
    }

    async fn load_item(&self, url: &str) -> Result<HeldItem, Error> {
        let data: Item = self.fetcher.fetch_json(url).await?;
        let resource = format!("item/{}", data.name);

        let name = select_localized(&data.names, self.language(), &resource, "names")?;
        let description = select_localized(
            &data.flavor_text_entries,
            self.language(),
            &resource,
            "flavor_text_entries",
        )?;

        Ok(HeldItem {
            name: name.name.clone(),
            description: normalize_flavor_text(&description.text),
        })
    }

    async fn load_shape(&self, url: &str) -> Result<String, Error> {
        let data: PokemonShape = self.fetcher.fetch_json(url).await?;
        let resource = format!("pokemon-shape/{}", data.name);

        let name = select_localized(&data.names, self.language(), &resource, "names")?;

        Ok(name.name.clone())
    }
}
