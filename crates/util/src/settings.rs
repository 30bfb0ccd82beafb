//! User settings for catsel.
//!
//! A small JSON file records the default selector variant, optional overrides
//! of its switches, and the theme picked in the TUI. The file lives at
//! `~/.config/catsel/settings.json` on most platforms and can be relocated
//! with `CATSEL_SETTINGS_PATH`. The store is safe to share between threads
//! thanks to the internal `Mutex`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use catsel_types::{SelectorConfig, Variant};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::paths::{config_file_path, path_from_env};

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "CATSEL_SETTINGS_PATH";

/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error surfaced when reading or writing settings fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted setting values. Every field is optional so a partial file is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPayload {
    /// Preset the selector starts from.
    pub variant: Option<Variant>,
    /// Overrides the preset's reference label switch.
    pub show_reference_label: Option<bool>,
    /// Overrides the preset's array compaction switch.
    pub compact_array_output: Option<bool>,
    /// Replaces the preset's excluded version keys.
    pub excluded_version_keys: Option<Vec<String>>,
    /// Identifier of the theme last selected in the TUI.
    pub preferred_theme: Option<String>,
}

impl SettingsPayload {
    /// Resolve the selector configuration: `variant` preset (or the default
    /// preset), then each explicit override.
    pub fn selector_config(&self, variant_override: Option<Variant>) -> SelectorConfig {
        let variant = variant_override.or(self.variant).unwrap_or_default();
        let mut config = SelectorConfig::for_variant(variant);
        if let Some(show) = self.show_reference_label {
            config.show_reference_label = show;
        }
        if let Some(compact) = self.compact_array_output {
            config.compact_array_output = compact;
        }
        if let Some(keys) = &self.excluded_version_keys {
            config = config.with_excluded_keys(keys.iter().cloned());
        }
        config
    }
}

/// Settings store backed by a JSON file.
#[derive(Debug, Default)]
pub struct Settings {
    path: PathBuf,
    payload: Mutex<SettingsPayload>,
    persist_to_disk: bool,
}

impl Settings {
    /// Open the store at `path`, or at the default location when `None`.
    pub fn open(path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let resolved_path = path.unwrap_or_else(default_settings_path);
        let payload = load_payload(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// In-memory store used when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(SettingsPayload::default()),
            persist_to_disk: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current payload.
    pub fn snapshot(&self) -> SettingsPayload {
        self.lock().clone()
    }

    /// See [`SettingsPayload::selector_config`].
    pub fn selector_config(&self, variant_override: Option<Variant>) -> SelectorConfig {
        self.lock().selector_config(variant_override)
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.lock().preferred_theme.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), SettingsError> {
        let mut payload = self.lock();
        payload.preferred_theme = theme_id;
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, SettingsPayload> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save_locked(&self, payload: &SettingsPayload) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// `CATSEL_SETTINGS_PATH`, else `<config-dir>/catsel/settings.json`.
pub fn default_settings_path() -> PathBuf {
    path_from_env(SETTINGS_PATH_ENV).unwrap_or_else(|| config_file_path(SETTINGS_FILE_NAME))
}

fn load_payload(path: &Path) -> Result<SettingsPayload, SettingsError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse settings file; using defaults"
                );
                Ok(SettingsPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(SettingsPayload::default()),
        Err(error) => Err(SettingsError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_default_annotated_config() {
        let dir = tempdir().unwrap();
        let settings = Settings::open(Some(dir.path().join("settings.json"))).unwrap();
        assert_eq!(settings.snapshot(), SettingsPayload::default());
        assert_eq!(settings.selector_config(None), SelectorConfig::default());
    }

    #[test]
    fn overrides_apply_on_top_of_the_variant_preset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"variant": "plain", "show_reference_label": true, "excluded_version_keys": ["reference"]}"#,
        )
        .unwrap();

        let settings = Settings::open(Some(path)).unwrap();
        let config = settings.selector_config(None);
        assert!(config.show_reference_label);
        assert!(!config.compact_array_output);
        assert!(config.is_excluded("reference"));
        assert!(!config.is_excluded("reference_for_species"));

        let annotated = settings.selector_config(Some(Variant::Annotated));
        assert!(annotated.compact_array_output);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        let settings = Settings::open(Some(path)).unwrap();
        assert_eq!(settings.snapshot(), SettingsPayload::default());
    }

    #[test]
    fn preferred_theme_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings::open(Some(path.clone())).unwrap();
        settings.set_preferred_theme(Some("nord".to_string())).unwrap();
        drop(settings);

        let reopened = Settings::open(Some(path)).unwrap();
        assert_eq!(reopened.preferred_theme().as_deref(), Some("nord"));
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let settings = Settings::ephemeral();
        settings.set_preferred_theme(Some("dracula".to_string())).unwrap();
        assert_eq!(settings.preferred_theme().as_deref(), Some("dracula"));
        assert_eq!(settings.path(), Path::new(""));
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(SETTINGS_PATH_ENV, Some("/tmp/catsel-settings.json"), || {
            assert_eq!(default_settings_path(), PathBuf::from("/tmp/catsel-settings.json"));
        });
    }
}
