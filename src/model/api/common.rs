use serde::{Deserialize, Serialize};

/// A `{name, url}` pointer to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// A `{url}` pointer without a name, used by `evolution_chain` on species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Text variant tagged with a language.
pub trait Localized {
    fn language(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub description: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedApiResource,
}

/// Item flavor texts carry their text under `text` rather than `flavor_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupFlavorText {
    pub text: String,
    pub language: NamedApiResource,
}

impl Localized for Name {
    fn language(&self) -> &str {
        &self.language.name
    }
}

impl Localized for Description {
    fn language(&self) -> &str {
        &self.language.name
    }
}

impl Localized for FlavorText {
    fn language(&self) -> &str {
        &self.language.name
    }
}

impl Localized for Genus {
    fn language(&self) -> &str {
        &self.language.name
    }
}

impl Localized for VersionGroupFlavorText {
    fn language(&self) -> &str {
        &self.language.name
    }
}
