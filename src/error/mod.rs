//! Error types for the ingestion job.
//!
//! Domain-specific enums cover configuration, fetching, payload interpretation and
//! persistence. They are aggregated into [`Error`] with `#[from]` conversions so every
//! layer can propagate with `?`, and the catalog driver classifies whatever reaches it
//! with [`Error::kind`] when recording a failed entry.

pub mod config;
pub mod fetch;
pub mod resolve;
pub mod retry;
pub mod store;

use thiserror::Error;

use crate::error::{
    config::ConfigError, fetch::FetchError, resolve::ResolveError, store::StoreError,
};

/// Main error type for the ingestion job.
///
/// Resolution of a single catalog entry fails with the first unrecoverable error it hits,
/// wrapped in this enum. Only startup errors (configuration, database connection, catalog
/// listing) are allowed to end the run; everything else is recorded per entry.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Remote API error, including exhausted retry budgets.
    #[error(transparent)]
    FetchError(#[from] FetchError),
    /// Payload could not be interpreted (missing localization, default variety, ...).
    #[error(transparent)]
    ResolveError(#[from] ResolveError),
    /// Document store conflict.
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// Database error (connection issues, migrations, query failures).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// A species record could not be serialized into a document.
    #[error(transparent)]
    SerializeError(#[from] serde_json::Error),
}

/// Coarse classification of a failure, used for run summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Transport or HTTP failure, usually after the retry budget ran out.
    Network,
    /// The API returned a payload the resolver cannot interpret.
    DataShape,
    /// The record collides with one already in the store.
    Conflict,
    /// The database rejected or failed the write.
    Storage,
    /// Configuration or serialization problem.
    Internal,
}

impl Error {
    /// Classify this error into the failure taxonomy reported by the catalog driver.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::FetchError(FetchError::Decode { .. }) => FailureKind::DataShape,
            Self::FetchError(_) => FailureKind::Network,
            Self::ResolveError(_) => FailureKind::DataShape,
            Self::StoreError(StoreError::DuplicateKey { .. }) => FailureKind::Conflict,
            Self::DbErr(_) => FailureKind::Storage,
            Self::ConfigError(_) | Self::SerializeError(_) => FailureKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_fetch_is_network_failure() {
        let err: Error = FetchError::RetriesExhausted {
            url: "http://localhost/pokemon/1/".to_string(),
            attempts: 3,
            last: Box::new(FetchError::Status {
                url: "http://localhost/pokemon/1/".to_string(),
                status: 503,
            }),
        }
        .into();

        assert_eq!(err.kind(), FailureKind::Network);
    }

    #[test]
    fn duplicate_key_is_conflict() {
        let err: Error = StoreError::DuplicateKey {
            name: "Bulbasaur".to_string(),
            pokedex_id: 1,
        }
        .into();

        assert_eq!(err.kind(), FailureKind::Conflict);
    }

    #[test]
    fn decode_failure_is_data_shape() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err: Error = FetchError::Decode {
            url: "http://localhost/move/1/".to_string(),
            source,
        }
        .into();

        assert_eq!(err.kind(), FailureKind::DataShape);
    }
}
