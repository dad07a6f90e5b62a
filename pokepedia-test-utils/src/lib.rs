//! Shared test setup for the ingestion job.
//!
//! [`TestSetup`] pairs a mockito server standing in for PokeAPI with an in-memory sqlite
//! database. Fixtures under [`fixtures::pokeapi`] build payloads that point back at the
//! mock server and register the endpoints serving them.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use fixtures::pokeapi::MockSpecies;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{test_setup_with_tables, MockSpecies, TestError, TestSetup};
}
