//! # Catsel Types
//!
//! Shared data definitions for the catalog selector: the two-level
//! [`Catalog`] model, the [`SelectorConfig`] feature switches, and the
//! effects the terminal frontend's components hand to its runtime.

pub mod catalog;
pub mod config;

pub use catalog::{
    Catalog, CatalogError, Entry, NO_VERSIONS_PLACEHOLDER, NOT_SET_LABEL, REFERENCE_FOR_SPECIES_KEY, REFERENCE_KEY, Section,
};
pub use config::{ParseVariantError, SelectorConfig, Variant};

/// Side effects requested by UI components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the event loop and restore the terminal
    Quit,
    /// Copy the given text to the system clipboard
    CopyToClipboard(String),
    /// Switch to the next theme in the catalog and persist the choice
    CycleTheme,
    /// Show a transient message in the status line
    Status(String),
}
