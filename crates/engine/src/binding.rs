//! Dependent two-level selector binding.
//!
//! The binding owns the current [`Selection`] and pushes every change into a
//! [`SelectorView`]. Choosing a section repopulates the version list and
//! selects its first eligible version; choosing a version re-renders the
//! output. Both transitions finish before the triggering call returns.

use std::sync::Arc;

use catsel_types::{Catalog, CatalogError, NO_VERSIONS_PLACEHOLDER, NOT_SET_LABEL, Section, SelectorConfig};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::format::format_entry;
use crate::view::SelectorView;

/// Errors surfaced by [`SelectorBinding`] operations.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("unknown section '{0}'")]
    UnknownSection(String),
    #[error("version '{version}' is not selectable in section '{section}'")]
    UnknownVersion { section: String, version: String },
    #[error("failed to format entry {section}/{version}: {source}")]
    Format {
        section: String,
        version: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the binding is in its section/version cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// The version list is being rebuilt; the output is stale.
    SectionSelected,
    /// The output matches the current (section, version) pair.
    VersionSelected,
    /// The current section offers no eligible versions; the output shows a placeholder.
    NoVersions,
}

/// The current (section, version) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub section: String,
    /// `None` only while the version list is rebuilt, or when the section has no eligible versions.
    pub version: Option<String>,
}

/// Two-level dependent selector over a static [`Catalog`].
#[derive(Debug)]
pub struct SelectorBinding<V> {
    catalog: Arc<Catalog>,
    config: SelectorConfig,
    view: V,
    selection: Selection,
    state: BindingState,
    section_options: Vec<String>,
    version_options: Vec<String>,
    reference_label: Option<String>,
    output: String,
}

impl<V: SelectorView> SelectorBinding<V> {
    /// Bind `view` to `catalog`, selecting the first section and its first eligible version.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] when the catalog has no sections, and
    /// [`BindingError::Format`] if the first entry cannot be rendered.
    pub fn initialize(catalog: Arc<Catalog>, config: SelectorConfig, view: V) -> Result<Self, BindingError> {
        let first_section = catalog.first_section().ok_or(CatalogError::Empty)?.to_string();
        let section_options: Vec<String> = catalog.section_names().map(str::to_string).collect();

        let mut binding = Self {
            catalog,
            config,
            view,
            selection: Selection {
                section: first_section,
                version: None,
            },
            state: BindingState::SectionSelected,
            section_options,
            version_options: Vec::new(),
            reference_label: None,
            output: String::new(),
        };
        debug!(sections = binding.section_options.len(), "binding selector to catalog");
        binding.view.set_section_options(&binding.section_options);
        binding.view.set_selected_section(&binding.selection.section);
        binding.on_section_change()?;
        Ok(binding)
    }

    /// Select `section` and run the section change handler.
    ///
    /// Unknown names are rejected and leave the current selection untouched.
    pub fn select_section(&mut self, section: &str) -> Result<(), BindingError> {
        if self.catalog.section(section).is_none() {
            return Err(BindingError::UnknownSection(section.to_string()));
        }
        self.selection.section = section.to_string();
        self.view.set_selected_section(section);
        self.on_section_change()
    }

    /// Select `version` within the current section and run the version change handler.
    ///
    /// Only names currently offered in the version list are accepted.
    pub fn select_version(&mut self, version: &str) -> Result<(), BindingError> {
        if !self.version_options.iter().any(|option| option == version) {
            return Err(BindingError::UnknownVersion {
                section: self.selection.section.clone(),
                version: version.to_string(),
            });
        }
        self.selection.version = Some(version.to_string());
        self.view.set_selected_version(Some(version));
        self.on_version_change()
    }

    /// Refresh the reference label and version list for the current section,
    /// then select its first eligible version.
    pub fn on_section_change(&mut self) -> Result<(), BindingError> {
        self.state = BindingState::SectionSelected;
        let catalog = Arc::clone(&self.catalog);
        let section = catalog
            .section(&self.selection.section)
            .ok_or_else(|| BindingError::UnknownSection(self.selection.section.clone()))?;

        if self.config.show_reference_label {
            let label = reference_label(section);
            self.view.set_reference_label(&label);
            self.reference_label = Some(label);
        }

        self.version_options.clear();
        self.version_options
            .extend(section.eligible_versions(&self.config.excluded_version_keys).map(str::to_string));
        self.selection.version = self.version_options.first().cloned();
        debug!(
            section = %self.selection.section,
            versions = self.version_options.len(),
            "section changed"
        );

        self.view.set_version_options(&self.version_options);
        self.view.set_selected_version(self.selection.version.as_deref());
        self.on_version_change()
    }

    /// Render the entry at the current selection into the output display.
    pub fn on_version_change(&mut self) -> Result<(), BindingError> {
        let Some(version) = self.selection.version.as_deref() else {
            warn!(section = %self.selection.section, "section has no selectable versions");
            self.output = NO_VERSIONS_PLACEHOLDER.to_string();
            self.view.set_output(&self.output);
            self.state = BindingState::NoVersions;
            return Ok(());
        };

        let entry = self
            .catalog
            .entry(&self.selection.section, version)
            .ok_or_else(|| BindingError::UnknownVersion {
                section: self.selection.section.clone(),
                version: version.to_string(),
            })?;
        let output = format_entry(entry, self.config.compact_array_output).map_err(|source| BindingError::Format {
            section: self.selection.section.clone(),
            version: version.to_string(),
            source,
        })?;

        self.view.set_output(&output);
        self.output = output;
        self.state = BindingState::VersionSelected;
        Ok(())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn section_options(&self) -> &[String] {
        &self.section_options
    }

    pub fn version_options(&self) -> &[String] {
        &self.version_options
    }

    /// Current reference label; `None` when the label is disabled.
    pub fn reference_label(&self) -> Option<&str> {
        self.reference_label.as_deref()
    }

    /// Text currently in the output display.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn selected_section_index(&self) -> Option<usize> {
        self.section_options
            .iter()
            .position(|option| *option == self.selection.section)
    }

    pub fn selected_version_index(&self) -> Option<usize> {
        let version = self.selection.version.as_deref()?;
        self.version_options.iter().position(|option| option == version)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

fn reference_label(section: &Section) -> String {
    match section.reference() {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => NOT_SET_LABEL.to_string(),
    }
}
