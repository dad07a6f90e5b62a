//! Helpers shared by the resolver: language filtering and resource URL parsing.

pub mod locale;
pub mod resource;
