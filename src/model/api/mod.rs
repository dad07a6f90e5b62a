//! PokeAPI v2 payloads.
//!
//! Only the fields the resolver reads are modelled; serde ignores the rest. Nullable
//! upstream fields are `Option`s, required ones fail decoding when absent.

pub mod common;
pub mod evolution;
pub mod pokemon;
pub mod reference;
pub mod species;

pub use common::{Description, FlavorText, Genus, Localized, Name, NamedApiResource};
