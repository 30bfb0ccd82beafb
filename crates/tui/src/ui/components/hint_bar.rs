//! Hint bar: focused component hints followed by the global key bindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::Component;
use crate::app::App;
use crate::ui::theme::helpers as th;

#[derive(Debug, Default)]
pub struct HintBarComponent {
    /// Hints contributed by the focused component for the next render.
    pub focused_hints: Vec<Span<'static>>,
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let mut spans = std::mem::take(&mut self.focused_hints);
        spans.extend(th::build_hint_spans(
            theme,
            &[(" Tab", " Focus  "), (" t", " Theme  "), (" q", " Quit ")],
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
