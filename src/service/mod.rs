//! The ingestion pipeline: fetching, caching, evolution flattening, species resolution
//! and the catalog driver tying them together.

pub mod cache;
pub mod catalog;
pub mod evolution;
pub mod fetch;
pub mod species;
