use thiserror::Error;

/// A fetched payload that cannot be reduced into a species record.
///
/// None of these are retried: refetching the same resource yields the same payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No {field} entry with language {language:?} in {resource}")]
    MissingLocalization {
        resource: String,
        field: &'static str,
        language: String,
    },
    #[error("Species {0:?} has no variety flagged as default")]
    DefaultVarietyMissing(String),
    #[error("Pokemon {0:?} has no type in slot 1")]
    MissingPrimaryType(String),
    #[error("Generation reference {0:?} does not end in a generation number")]
    MalformedGenerationRef(String),
    #[error("Move {move_name:?} of pokemon {pokemon:?} has no version group details")]
    MissingMoveLearnDetails { pokemon: String, move_name: String },
    #[error("Evolution chain {chain_id} is nested deeper than {max_depth} levels")]
    EvolutionDepthExceeded { chain_id: i32, max_depth: usize },
}
