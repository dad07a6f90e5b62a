//! Batch ingestion of the PokeAPI species catalog.
//!
//! The job lists every species once, resolves each into a denormalized
//! [`SpeciesRecord`](model::record::SpeciesRecord) by fetching its default variety,
//! evolution chain and shared sub-resources (cached for the whole run), and inserts one
//! document per species into the `pokemon` collection.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
