//! Run-scoped caches for shared sub-resources.
//!
//! Many species reference the same moves, abilities, growth rates, egg groups, held
//! items and shapes. Each category gets a [`ReferenceCache`] keyed by the resource slug;
//! a key is loaded at most once per run and the stored projection is returned for every
//! later lookup. Entries are never invalidated or evicted.
//!
//! Loading takes `&mut self`, so the borrow checker enforces the single-writer discipline
//! the sequential driver relies on.

use std::collections::HashMap;
use std::future::Future;

use crate::{
    error::Error,
    model::record::{AbilityDetails, HeldItem, MoveDetails},
};

/// Key → resolved value mapping for one category of shared resource.
#[derive(Clone, Debug)]
pub struct ReferenceCache<V> {
    category: &'static str,
    entries: HashMap<String, V>,
    hits: u64,
}

impl<V: Clone> ReferenceCache<V> {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            entries: HashMap::new(),
            hits: 0,
        }
    }

    /// Returns the cached value for `key`, invoking `loader` only on a miss.
    ///
    /// A failed load stores nothing, so a later lookup of the same key loads again.
    ///
    /// # Arguments
    /// - `key` - Stable slug of the referenced resource
    /// - `loader` - Fetches and projects the resource; called at most once per cached key
    ///
    /// # Returns
    /// - `Ok(V)` - The cached or freshly loaded value
    /// - `Err(Error)` - The loader failed
    pub async fn resolve<F, Fut>(&mut self, key: &str, loader: F) -> Result<V, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, Error>>,
    {
        if let Some(value) = self.entries.get(key) {
            self.hits += 1;
            return Ok(value.clone());
        }

        let value = loader().await?;
        self.entries.insert(key.to_string(), value.clone());

        tracing::debug!("Cached new {} {}", self.category, key);

        Ok(value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Number of distinct resources loaded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered without calling a loader.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

/// All reference caches of one ingestion run.
///
/// Created by the catalog driver and passed by mutable reference into the species
/// resolver, so nothing outlives the run.
#[derive(Clone, Debug)]
pub struct ReferenceCaches {
    pub moves: ReferenceCache<MoveDetails>,
    pub abilities: ReferenceCache<AbilityDetails>,
    /// Localized growth rate description
    pub growth_rates: ReferenceCache<String>,
    /// Localized egg group name
    pub egg_groups: ReferenceCache<String>,
    pub held_items: ReferenceCache<HeldItem>,
    /// Localized shape name
    pub shapes: ReferenceCache<String>,
}

impl Default for ReferenceCaches {
    fn default() -> Self {
        Self {
            moves: ReferenceCache::new("move"),
            abilities: ReferenceCache::new("ability"),
            growth_rates: ReferenceCache::new("growth rate"),
            egg_groups: ReferenceCache::new("egg group"),
            held_items: ReferenceCache::new("held item"),
            shapes: ReferenceCache::new("shape"),
        }
    }
}

impl ReferenceCaches {
    /// `(category, distinct entries)` for every cache, for run summaries.
    pub fn sizes(&self) -> Vec<(&'static str, usize)> {
        vec![
            (self.moves.category(), self.moves.len()),
            (self.abilities.category(), self.abilities.len()),
            (self.growth_rates.category(), self.growth_rates.len()),
            (self.egg_groups.category(), self.egg_groups.len()),
            (self.held_items.category(), self.held_items.len()),
            (self.shapes.category(), self.shapes.len()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::error::resolve::ResolveError;

    use super::*;

    /// Should call the loader once for repeated lookups of the same key
    #[tokio::test]
    async fn loads_each_key_once() {
        let mut cache = ReferenceCache::new("shape");
        let loads = Cell::new(0);

        for _ in 0..5 {
            let value = cache
                .resolve("quadruped", || async {
                    loads.set(loads.get() + 1);
                    Ok("Quadruped".to_string())
                })
                .await
                .unwrap();
            assert_eq!(value, "Quadruped");
        }

        assert_eq!(loads.get(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 4);
    }

    /// Every lookup returns the value of the first resolution
    #[tokio::test]
    async fn later_loaders_are_ignored_for_cached_keys() {
        let mut cache = ReferenceCache::new("egg group");

        let first = cache
            .resolve("monster", || async { Ok("Monster".to_string()) })
            .await
            .unwrap();
        let second = cache
            .resolve("monster", || async { Ok("Something else".to_string()) })
            .await
            .unwrap();

        assert_eq!(first, "Monster");
        assert_eq!(second, "Monster");
    }

    /// Distinct keys are loaded independently
    #[tokio::test]
    async fn distinct_keys_load_separately() {
        let mut cache = ReferenceCache::new("egg group");
        let loads = Cell::new(0);

        for key in ["monster", "plant", "monster", "plant", "dragon"] {
            cache
                .resolve(key, || async {
                    loads.set(loads.get() + 1);
                    Ok(key.to_uppercase())
                })
                .await
                .unwrap();
        }

        assert_eq!(loads.get(), 3);
        assert_eq!(cache.get("plant").map(String::as_str), Some("PLANT"));
    }

    /// A failed load is not cached and can be retried by a later lookup
    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let mut cache: ReferenceCache<String> = ReferenceCache::new("shape");

        let result = cache
            .resolve("ball", || async {
                Err(ResolveError::MissingLocalization {
                    resource: "pokemon-shape/ball".to_string(),
                    field: "names",
                    language: "en".to_string(),
                }
                .into())
            })
            .await;

        assert!(matches!(result, Err(Error::ResolveError(_))));
        assert!(!cache.contains("ball"));

        let value = cache
            .resolve("ball", || async { Ok("Ball".to_string()) })
            .await
            .unwrap();
        assert_eq!(value, "Ball");
    }

    #[test]
    fn default_caches_start_empty() {
        let caches = ReferenceCaches::default();

        assert!(caches.sizes().iter().all(|(_, len)| *len == 0));
        assert_eq!(caches.sizes().len(), 6);
    }
}
