use crate::error::resolve::ResolveError;

/// Extract the generation number from a generation reference URL.
///
/// The number is the last path segment, e.g. `https://pokeapi.co/api/v2/generation/3/`
/// yields `3`. A single trailing slash is optional.
pub fn parse_generation(url: &str) -> Result<u32, ResolveError> {
    let malformed = || ResolveError::MalformedGenerationRef(url.to_string());

    let path = url.strip_suffix('/').unwrap_or(url);
    let segment = path.rsplit('/').next().ok_or_else(malformed)?;

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    segment.parse().map_err(|_| malformed())
}

/// Cache key for a referenced resource: its slug, falling back to the URL.
pub fn reference_key<'a>(name: &'a str, url: &'a str) -> &'a str {
    if name.is_empty() {
        url
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trailing_generation_number() {
        assert_eq!(
            parse_generation("https://pokeapi.co/api/v2/generation/3/"),
            Ok(3)
        );
        assert_eq!(
            parse_generation("https://pokeapi.co/api/v2/generation/12"),
            Ok(12)
        );
    }

    #[test]
    fn rejects_reference_without_number() {
        for url in [
            "https://pokeapi.co/api/v2/generation/generation-iii/",
            "https://pokeapi.co/api/v2/generation/",
            "https://pokeapi.co/api/v2/generation//",
            "",
        ] {
            assert_eq!(
                parse_generation(url),
                Err(ResolveError::MalformedGenerationRef(url.to_string())),
                "url: {url:?}"
            );
        }
    }

    #[test]
    fn rejects_signed_or_overflowing_numbers() {
        assert!(parse_generation("https://pokeapi.co/api/v2/generation/-3/").is_err());
        assert!(parse_generation("https://pokeapi.co/api/v2/generation/99999999999/").is_err());
    }
}
