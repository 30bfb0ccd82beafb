//! # Catsel Util
//!
//! Supporting plumbing around the selector: loading the catalog document,
//! the user settings store, and path resolution for config and log files.

pub mod catalog_loader;
pub mod paths;
pub mod settings;

pub use catalog_loader::{load_catalog, parse_catalog, read_catalog};
pub use paths::{display_path, expand_tilde, path_from_env};
pub use settings::{SETTINGS_PATH_ENV, Settings, SettingsError, SettingsPayload};
