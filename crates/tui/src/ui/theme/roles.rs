use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub focus: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    /// Object keys in highlighted JSON.
    pub syntax_key: Color,
    pub syntax_string: Color,
    pub syntax_number: Color,
    /// `true`, `false` and `null`.
    pub syntax_keyword: Color,
    pub syntax_punctuation: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.roles().selection_fg)
            .bg(self.roles().selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent).add_modifier(Modifier::BOLD)
    }

    fn syntax_key_style(&self) -> Style {
        Style::default().fg(self.roles().syntax_key)
    }
    fn syntax_string_style(&self) -> Style {
        Style::default().fg(self.roles().syntax_string)
    }
    fn syntax_number_style(&self) -> Style {
        Style::default().fg(self.roles().syntax_number)
    }
    fn syntax_keyword_style(&self) -> Style {
        Style::default().fg(self.roles().syntax_keyword)
    }
    fn syntax_punctuation_style(&self) -> Style {
        Style::default().fg(self.roles().syntax_punctuation)
    }
}
