//! Data shapes for the ingestion job.
//!
//! `api` mirrors the subset of PokeAPI payloads the resolver reads, `record` is the
//! denormalized document persisted once per species.

pub mod api;
pub mod record;
