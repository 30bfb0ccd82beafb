//! Theme styling for the TUI.
//!
//! A small set of palettes expressed as semantic roles, plus helper builders
//! for blocks and hint strips. Prefer the roles over hard-coded colors.

use std::env;

use tracing::debug;

pub mod catalog;
pub mod helpers;
pub mod roles;

pub use catalog::ThemeDefinition;
pub use roles::Theme;

/// Environment variable that forces a theme regardless of saved settings.
pub const THEME_ENV: &str = "CATSEL_THEME";

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    pub fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

/// Selects a theme: `CATSEL_THEME`, then the saved preference, then the default palette.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if let Ok(theme_name) = env::var(THEME_ENV)
        && let Some(definition) = catalog::resolve(theme_name.trim())
    {
        debug!(theme = definition.id, "theme selected from environment");
        return LoadedTheme::from_definition(definition);
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = catalog::resolve(name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(catalog::default_definition())
}
