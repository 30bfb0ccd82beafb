//! Reference label panel, present only when the selector maintains one.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::Component;
use crate::app::App;
use crate::ui::theme::helpers as th;

#[derive(Debug, Default)]
pub struct ReferenceComponent;

impl Component for ReferenceComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let block = th::block(theme, Some("Reference"), false);
        let label = app.controls().reference_label.clone().unwrap_or_default();
        let paragraph = Paragraph::new(Line::from(Span::styled(label, theme.text_primary_style())))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, rect);
    }
}
