//! Selector configuration and the presets for the two historic behaviours.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::REFERENCE_FOR_SPECIES_KEY;

/// Named preset of [`SelectorConfig`].
///
/// `Plain` shows raw pretty-printed JSON and offers every section key as a
/// version. `Annotated` adds the reference label, compacts multi-line arrays
/// and hides `reference_for_species` from the version list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Plain,
    #[default]
    Annotated,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Plain, Variant::Annotated];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Annotated => "annotated",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant '{0}' (expected one of: plain, annotated)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "a" => Ok(Variant::Plain),
            "annotated" | "b" => Ok(Variant::Annotated),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}

/// Feature switches for the selector binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Whether the auxiliary reference label is maintained.
    pub show_reference_label: bool,
    /// Whether multi-line arrays in the output are collapsed onto one line.
    pub compact_array_output: bool,
    /// Section keys never offered as selectable versions.
    pub excluded_version_keys: BTreeSet<String>,
}

impl SelectorConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Plain => Self {
                show_reference_label: false,
                compact_array_output: false,
                excluded_version_keys: BTreeSet::new(),
            },
            Variant::Annotated => Self {
                show_reference_label: true,
                compact_array_output: true,
                excluded_version_keys: BTreeSet::from([REFERENCE_FOR_SPECIES_KEY.to_string()]),
            },
        }
    }

    /// Replace the excluded key set.
    pub fn with_excluded_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_version_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded_version_keys.contains(key)
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl From<Variant> for SelectorConfig {
    fn from(variant: Variant) -> Self {
        Self::for_variant(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_historic_behaviour() {
        let plain = SelectorConfig::for_variant(Variant::Plain);
        assert!(!plain.show_reference_label);
        assert!(!plain.compact_array_output);
        assert!(plain.excluded_version_keys.is_empty());

        let annotated = SelectorConfig::default();
        assert!(annotated.show_reference_label);
        assert!(annotated.compact_array_output);
        assert!(annotated.is_excluded("reference_for_species"));
        assert!(!annotated.is_excluded("reference"));
    }

    #[test]
    fn variant_parses_names_and_letters() {
        assert_eq!("Plain".parse::<Variant>(), Ok(Variant::Plain));
        assert_eq!(" b ".parse::<Variant>(), Ok(Variant::Annotated));
        assert_eq!(
            "fancy".parse::<Variant>(),
            Err(ParseVariantError("fancy".to_string()))
        );
    }

    #[test]
    fn with_excluded_keys_replaces_the_set() {
        let config = SelectorConfig::default().with_excluded_keys(["reference", "reference_for_species"]);
        assert!(config.is_excluded("reference"));
        assert_eq!(config.excluded_version_keys.len(), 2);
    }
}
