//! Catalog driver.
//!
//! Lists the catalog once, then resolves and persists every entry strictly in listing
//! order. A failure of one entry is recorded in the [`RunSummary`] and the run moves on;
//! only failing to list the catalog aborts the run.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;

use crate::{
    config::ResolverConfig,
    data::pokemon::PokemonRepository,
    error::{Error, FailureKind},
    model::api::species::{CatalogEntry, CatalogPage},
    service::{
        cache::ReferenceCaches,
        fetch::{Fetcher, HttpTransport, Transport},
        species::SpeciesResolver,
    },
};

/// An entry that could not be resolved or persisted.
#[derive(Debug)]
pub struct FailedEntry {
    /// Position in the catalog listing, starting at 0
    pub index: usize,
    pub entry: CatalogEntry,
    pub error: Error,
}

impl FailedEntry {
    pub fn kind(&self) -> FailureKind {
        self.error.kind()
    }
}

/// Outcome of one run over the catalog.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Entries the driver attempted
    pub attempted: usize,
    /// Entries resolved and persisted
    pub processed: usize,
    pub failed: Vec<FailedEntry>,
    /// `(category, distinct resources fetched)` per reference cache
    pub cache_sizes: Vec<(&'static str, usize)>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether every attempted entry was persisted.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Failure counts grouped by kind.
    pub fn failures_by_kind(&self) -> HashMap<FailureKind, usize> {
        let mut counts = HashMap::new();
        for failed in &self.failed {
            *counts.entry(failed.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Failed entry for the species slug `name`, if it failed.
    pub fn failure_for(&self, name: &str) -> Option<&FailedEntry> {
        self.failed.iter().find(|f| f.entry.name == name)
    }

    /// Log the summary, one line per failed entry.
    pub fn log(&self) {
        tracing::info!(
            "Fetched {} entries: {} stored, {} failed in {:?}",
            self.attempted,
            self.processed,
            self.failed_count(),
            self.elapsed
        );

        for (category, size) in &self.cache_sizes {
            tracing::info!("Resolved {} distinct {} resources", size, category);
        }

        for failed in &self.failed {
            tracing::warn!(
                "Entry {} ({}) failed [{:?}]: {}",
                failed.index,
                failed.entry.name,
                failed.kind(),
                failed.error
            );
        }
    }
}

/// Drives one ingestion run over the whole catalog.
pub struct CatalogDriver<'a, T = HttpTransport> {
    db: &'a DatabaseConnection,
    fetcher: &'a Fetcher<T>,
    resolver_config: &'a ResolverConfig,
    catalog_url: String,
}

impl<'a, T: Transport> CatalogDriver<'a, T> {
    pub fn new(
        db: &'a DatabaseConnection,
        fetcher: &'a Fetcher<T>,
        resolver_config: &'a ResolverConfig,
        catalog_url: String,
    ) -> Self {
        Self {
            db,
            fetcher,
            resolver_config,
            catalog_url,
        }
    }

    /// Lists the catalog with a single request.
    pub async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, Error> {
        let page: CatalogPage = self.fetcher.fetch_json(&self.catalog_url).await?;

        if page.results.len() < page.count as usize {
            tracing::warn!(
                "Catalog listing returned {} of {} entries, raise the listing limit to ingest the rest",
                page.results.len(),
                page.count
            );
        }

        Ok(page.results)
    }

    /// Runs the ingestion over the whole catalog.
    ///
    /// Each entry is resolved then persisted before the next one starts, and the reference
    /// caches live for exactly this call.
    ///
    /// # Returns
    /// - `Ok(RunSummary)` - The catalog was listed; per-entry failures are in the summary
    /// - `Err(Error)` - The catalog listing could not be fetched
    pub async fn run(&self) -> Result<RunSummary, Error> {
        let started = Instant::now();
        let entries = self.list_catalog().await?;

        tracing::info!("Ingesting {} catalog entries", entries.len());

        let mut caches = ReferenceCaches::default();
        let mut summary = RunSummary::default();
        let resolver = SpeciesResolver::new(self.fetcher, self.resolver_config);
        let repo = PokemonRepository::new(self.db);

        for (index, entry) in entries.into_iter().enumerate() {
            summary.attempted += 1;

            let result = match resolver.resolve(&entry, &mut caches).await {
                Ok(record) => repo.create(&entry.name, &record).await.map(|_| record),
                Err(e) => Err(e),
            };

            match result {
                Ok(record) => {
                    tracing::info!("Stored {} (#{}), entry {}", record.name, record.id, index);
                    summary.processed += 1;
                }
                Err(error) => {
                    tracing::error!("Failed to ingest {}: {}", entry.name, error);
                    summary.failed.push(FailedEntry {
                        index,
                        entry,
                        error,
                    });
                }
            }
        }

        summary.cache_sizes = caches.sizes();
        summary.elapsed = started.elapsed();

        Ok(summary)
    }
}
