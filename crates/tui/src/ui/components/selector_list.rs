//! Section and version lists.
//!
//! Each list mirrors one selection control. Moving the highlight is the
//! "change" event: it immediately selects the new option through the binding,
//! so the version list and output always follow the highlighted entries.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use catsel_types::Effect;

use super::Component;
use crate::app::{App, Focus};
use crate::ui::theme::helpers as th;

/// Which selection control a list mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Sections,
    Versions,
}

impl ListKind {
    fn title(self) -> &'static str {
        match self {
            ListKind::Sections => "Section",
            ListKind::Versions => "Version",
        }
    }

    fn focus(self) -> Focus {
        match self {
            ListKind::Sections => Focus::Sections,
            ListKind::Versions => Focus::Versions,
        }
    }
}

#[derive(Debug)]
pub struct SelectorListComponent {
    kind: ListKind,
    list_state: ListState,
}

impl SelectorListComponent {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            list_state: ListState::default(),
        }
    }

    fn options<'a>(&self, app: &'a App) -> &'a [String] {
        let controls = app.controls();
        match self.kind {
            ListKind::Sections => &controls.section_options,
            ListKind::Versions => &controls.version_options,
        }
    }

    fn selected_index(&self, app: &App) -> Option<usize> {
        let controls = app.controls();
        match self.kind {
            ListKind::Sections => controls.selected_section_index(),
            ListKind::Versions => controls.selected_version_index(),
        }
    }

    fn choose(&self, app: &mut App, index: usize) -> Vec<Effect> {
        if Some(index) == self.selected_index(app) {
            return Vec::new();
        }
        match self.kind {
            ListKind::Sections => app.choose_section(index),
            ListKind::Versions => app.choose_version(index),
        }
    }
}

impl Component for SelectorListComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let count = self.options(app).len();
        if count == 0 {
            return Vec::new();
        }
        let current = self.selected_index(app).unwrap_or(0);
        let target = match key.code {
            KeyCode::Up | KeyCode::Char('k') => current.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (current + 1).min(count - 1),
            KeyCode::Home | KeyCode::Char('g') => 0,
            KeyCode::End | KeyCode::Char('G') => count - 1,
            _ => return Vec::new(),
        };
        self.choose(app, target)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let focused = app.focus == self.kind.focus();
        let block = th::block(theme, Some(self.kind.title()), focused);
        let inner_width = rect.width.saturating_sub(4) as usize;

        let options = self.options(app);
        let items: Vec<ListItem> = if options.is_empty() {
            vec![ListItem::new(Line::from(Span::styled("(none)", theme.text_muted_style())))]
        } else {
            options
                .iter()
                .map(|option| ListItem::new(Line::from(Span::styled(fit_label(option, inner_width), theme.text_primary_style()))))
                .collect()
        };

        let selected = self.selected_index(app);
        self.list_state.select(selected);
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selection_style())
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.theme.theme, &[(" ↑/↓", " Select  "), (" Home/End", " First/Last  ")])
    }
}

/// Truncate `label` with an ellipsis so it fits `width` terminal cells.
fn fit_label(label: &str, width: usize) -> String {
    if width == 0 || label.width() <= width {
        return label.to_string();
    }
    let mut fitted = String::new();
    let mut used = 0;
    for character in label.chars() {
        let character_width = unicode_width::UnicodeWidthChar::width(character).unwrap_or(0);
        if used + character_width + 1 > width {
            break;
        }
        fitted.push(character);
        used += character_width;
    }
    fitted.push('…');
    fitted
}
