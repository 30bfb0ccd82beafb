//! Header bar: title, catalog provenance and the transient status line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::Component;
use crate::app::App;
use crate::ui::theme::Theme;

#[derive(Debug, Default)]
pub struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme: &dyn Theme = &*app.theme.theme;
        let [title_area, status_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(rect);

        let mut title_spans = vec![Span::styled(
            app.options.title.clone(),
            theme.accent_emphasis_style().add_modifier(Modifier::BOLD),
        )];
        if !app.options.subtitle.is_empty() {
            title_spans.push(Span::styled(format!("  {}", app.options.subtitle), theme.text_muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(title_spans)), title_area);

        if let Some(status) = app.status.as_deref() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(status.to_string(), theme.text_secondary_style()))),
                status_area,
            );
        }
    }
}
