//! Built-in palettes and the ordered list the loader and theme cycling use.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// A theme defined entirely by its role table.
#[derive(Debug, Clone)]
pub struct PaletteTheme {
    roles: ThemeRoles,
}

impl Theme for PaletteTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Alternate spellings accepted from the environment.
    pub aliases: &'static [&'static str],
    roles: fn() -> ThemeRoles,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        Box::new(PaletteTheme { roles: (self.roles)() })
    }

    fn matches(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// Ordered list of selectable themes. The first entry is the default.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        aliases: &["dark"],
        roles: dracula_roles,
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        aliases: &["polar"],
        roles: nord_roles,
    },
    ThemeDefinition {
        id: "ansi",
        label: "ANSI",
        aliases: &["ansi256", "basic"],
        roles: ansi_roles,
    },
];

pub fn default_definition() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Look up a definition by id or alias, ignoring ASCII case.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| definition.matches(name))
}

/// The definition after `id`, wrapping around; the default when `id` is unknown.
pub fn next_after(id: &str) -> &'static ThemeDefinition {
    match THEME_DEFINITIONS.iter().position(|definition| definition.id == id) {
        Some(index) => &THEME_DEFINITIONS[(index + 1) % THEME_DEFINITIONS.len()],
        None => default_definition(),
    }
}

fn dracula_roles() -> ThemeRoles {
    let background = Color::Rgb(0x28, 0x2A, 0x36);
    let current_line = Color::Rgb(0x44, 0x47, 0x5A);
    let foreground = Color::Rgb(0xF8, 0xF8, 0xF2);
    let comment = Color::Rgb(0x62, 0x72, 0xA4);
    ThemeRoles {
        background,
        surface: background,
        border: current_line,
        focus: Color::Rgb(0x8B, 0xE9, 0xFD),
        text: foreground,
        text_secondary: comment,
        text_muted: comment,
        accent: Color::Rgb(0xFF, 0x79, 0xC6),
        selection_bg: current_line,
        selection_fg: foreground,
        syntax_key: Color::Rgb(0x8B, 0xE9, 0xFD),
        syntax_string: Color::Rgb(0xF1, 0xFA, 0x8C),
        syntax_number: Color::Rgb(0xBD, 0x93, 0xF9),
        syntax_keyword: Color::Rgb(0xFF, 0xB8, 0x6C),
        syntax_punctuation: foreground,
    }
}

fn nord_roles() -> ThemeRoles {
    let polar_night = Color::Rgb(0x2E, 0x34, 0x40);
    let polar_night_light = Color::Rgb(0x43, 0x4C, 0x5E);
    let snow = Color::Rgb(0xEC, 0xEF, 0xF4);
    let frost = Color::Rgb(0x88, 0xC0, 0xD0);
    ThemeRoles {
        background: polar_night,
        surface: polar_night,
        border: polar_night_light,
        focus: frost,
        text: snow,
        text_secondary: Color::Rgb(0xD8, 0xDE, 0xE9),
        text_muted: Color::Rgb(0x61, 0x6E, 0x88),
        accent: frost,
        selection_bg: polar_night_light,
        selection_fg: snow,
        syntax_key: Color::Rgb(0x81, 0xA1, 0xC1),
        syntax_string: Color::Rgb(0xA3, 0xBE, 0x8C),
        syntax_number: Color::Rgb(0xB4, 0x8E, 0xAD),
        syntax_keyword: Color::Rgb(0xD0, 0x87, 0x70),
        syntax_punctuation: snow,
    }
}

fn ansi_roles() -> ThemeRoles {
    ThemeRoles {
        background: Color::Reset,
        surface: Color::Reset,
        border: Color::DarkGray,
        focus: Color::Cyan,
        text: Color::Reset,
        text_secondary: Color::Gray,
        text_muted: Color::DarkGray,
        accent: Color::Magenta,
        selection_bg: Color::Blue,
        selection_fg: Color::White,
        syntax_key: Color::Cyan,
        syntax_string: Color::Yellow,
        syntax_number: Color::Magenta,
        syntax_keyword: Color::LightRed,
        syntax_punctuation: Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_ids_and_aliases_case_insensitively() {
        assert_eq!(resolve("NORD").map(|definition| definition.id), Some("nord"));
        assert_eq!(resolve("ansi256").map(|definition| definition.id), Some("ansi"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn next_after_wraps_and_defaults() {
        assert_eq!(next_after("dracula").id, "nord");
        assert_eq!(next_after("ansi").id, "dracula");
        assert_eq!(next_after("unknown").id, default_definition().id);
    }
}
