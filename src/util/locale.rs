//! Language filtering for localized API text.
//!
//! Every localized list (names, descriptions, flavor texts, genera) is reduced to the
//! single entry whose language tag equals the configured target language. A list with no
//! matching entry is a [`ResolveError::MissingLocalization`], never a silent `None`.

use crate::{error::resolve::ResolveError, model::api::Localized};

/// Selects the first entry of `entries` tagged with `language`.
///
/// Flavor text lists are ordered by version upstream, so the first match is the one the
/// record uses.
///
/// # Arguments
/// - `entries` - Localized variants of a single text field
/// - `language` - Target language tag (e.g. `en`)
/// - `resource` - Resource the list belongs to, for the error message
/// - `field` - Field the list belongs to, for the error message
///
/// # Returns
/// - `Ok(&T)` - The first entry in the target language
/// - `Err(ResolveError::MissingLocalization)` - No entry is in the target language
pub fn select_localized<'a, T: Localized>(
    entries: &'a [T],
    language: &str,
    resource: &str,
    field: &'static str,
) -> Result<&'a T, ResolveError> {
    entries
        .iter()
        .find(|entry| entry.language() == language)
        .ok_or_else(|| ResolveError::MissingLocalization {
            resource: resource.to_string(),
            field,
            language: language.to_string(),
        })
}

/// Collapse the hard line breaks and form feeds of in-game text into single spaces.
pub fn normalize_flavor_text(text: &str) -> String {
    text.split(['\n', '\u{c}', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
