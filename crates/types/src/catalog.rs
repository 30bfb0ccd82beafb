//! Catalog data model.
//!
//! A [`Catalog`] maps section names to [`Section`]s, and every section maps
//! version names to an arbitrary JSON [`Entry`]. Both levels keep the key
//! order of the source document so option lists appear in the order the
//! author wrote them.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Section key whose value is shown in the auxiliary reference label.
pub const REFERENCE_KEY: &str = "reference";

/// Section key that is never offered as a selectable version by the annotated variant.
pub const REFERENCE_FOR_SPECIES_KEY: &str = "reference_for_species";

/// Label text used when a section carries no `reference` key.
pub const NOT_SET_LABEL: &str = "Not set";

/// Output text rendered when a section has no selectable versions.
pub const NO_VERSIONS_PLACEHOLDER: &str = "No versions available";

/// The JSON value stored at one (section, version) pair.
pub type Entry = Value;

/// Errors raised while turning a JSON document into a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("failed to read catalog from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The catalog source is not valid JSON.
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document root is something other than a JSON object.
    #[error("catalog must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    /// A section value is something other than a JSON object.
    #[error("section '{section}' must be a JSON object, found {found}")]
    SectionNotAnObject { section: String, found: &'static str },
    /// The catalog holds no sections at all.
    #[error("catalog is empty; at least one section is required")]
    Empty,
}

/// Mapping of version name to [`Entry`] for one section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    entries: IndexMap<String, Entry>,
}

impl Section {
    /// Returns the entry stored under `key`, reserved keys included.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// All keys in document order, reserved keys included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The value of the `reference` key, if the section has one.
    pub fn reference(&self) -> Option<&Entry> {
        self.entries.get(REFERENCE_KEY)
    }

    /// Keys that may be offered as versions, skipping anything in `excluded`.
    pub fn eligible_versions<'a>(&'a self, excluded: &'a BTreeSet<String>) -> impl Iterator<Item = &'a str> + 'a {
        self.keys().filter(move |key| !excluded.contains(*key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Entry)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}

/// The full static dataset: section name to [`Section`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    sections: IndexMap<String, Section>,
}

impl Catalog {
    /// Build a catalog from an already parsed JSON document.
    ///
    /// The root must be an object of objects. An empty root is rejected so
    /// callers can fail before any controls are bound.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Object(root) = value else {
            return Err(CatalogError::NotAnObject {
                found: json_kind(&value),
            });
        };

        let mut sections = IndexMap::with_capacity(root.len());
        for (name, section_value) in root {
            let Value::Object(entries) = section_value else {
                return Err(CatalogError::SectionNotAnObject {
                    found: json_kind(&section_value),
                    section: name,
                });
            };
            sections.insert(name, entries.into_iter().collect::<Section>());
        }

        let catalog = Self { sections };
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// First section name in document order.
    pub fn first_section(&self) -> Option<&str> {
        self.sections.keys().next().map(String::as_str)
    }

    /// Entry stored at (`section`, `version`).
    pub fn entry(&self, section: &str, version: &str) -> Option<&Entry> {
        self.sections.get(section).and_then(|entries| entries.get(version))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Section)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, Section)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().map(|(key, section)| (key.into(), section)).collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
