//! # Catsel Engine
//!
//! The selector binding at the heart of catsel: a dependent two-level
//! selection over a static catalog, plus the formatting rule that turns the
//! selected entry into display text.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use catsel_engine::{ControlsSnapshot, SelectorBinding};
//! use catsel_types::{Catalog, SelectorConfig};
//!
//! let catalog = Catalog::from_json_str(r#"{"Assay1": {"v1": {"scores": [1, 2]}}}"#)?;
//! let binding = SelectorBinding::initialize(Arc::new(catalog), SelectorConfig::default(), ControlsSnapshot::new())?;
//! assert_eq!(binding.view().output, "{\n  \"scores\": [1,2]\n}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`binding`**: the selection state machine and its error type
//! - **`format`**: pretty-printing and array compaction
//! - **`view`**: the presentation seam the binding writes into

pub mod binding;
pub mod format;
pub mod view;

pub use binding::{BindingError, BindingState, Selection, SelectorBinding};
pub use format::{compact_arrays, format_entry};
pub use view::{ControlsSnapshot, SelectorView};
