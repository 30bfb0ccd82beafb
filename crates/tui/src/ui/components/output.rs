//! Output pane: the formatted entry for the current selection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use catsel_types::Effect;

use super::Component;
use crate::app::{App, Focus};
use crate::ui::json_syntax::highlight_lines;
use crate::ui::theme::helpers as th;

#[derive(Debug, Default)]
pub struct OutputComponent {
    /// Inner height from the last render, used as the page size.
    viewport_height: u16,
}

impl OutputComponent {
    fn page(&self) -> i32 {
        i32::from(self.viewport_height.max(1))
    }
}

impl Component for OutputComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.scroll_output(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_output(1),
            KeyCode::PageUp => app.scroll_output(-self.page()),
            KeyCode::PageDown => app.scroll_output(self.page()),
            KeyCode::Home | KeyCode::Char('g') => app.output_scroll = 0,
            KeyCode::End | KeyCode::Char('G') => app.scroll_output(i32::MAX / 2),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let line_count = app.output_line_count();
        let title = format!("Output ({line_count} lines)");
        let block = th::block(theme, Some(&title), app.focus == Focus::Output);
        self.viewport_height = block.inner(rect).height;

        let lines = highlight_lines(app.binding.output(), theme);
        let paragraph = Paragraph::new(lines).block(block).scroll((app.output_scroll, 0));
        frame.render_widget(paragraph, rect);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.theme.theme, &[(" ↑/↓", " Scroll  "), (" PgUp/PgDn", " Page  "), (" y", " Copy  ")])
    }
}
