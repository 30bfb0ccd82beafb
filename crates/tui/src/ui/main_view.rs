//! Root view: owns every component, routes keys and lays out the frame.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::widgets::Block;

use catsel_types::Effect;

use crate::app::{App, Focus};
use crate::ui::components::{
    Component, HeaderComponent, HintBarComponent, ListKind, OutputComponent, ReferenceComponent, SelectorListComponent,
};
use crate::ui::layout::MainLayout;
use crate::ui::theme::helpers as th;

pub struct MainView {
    header: HeaderComponent,
    sections: SelectorListComponent,
    versions: SelectorListComponent,
    reference: ReferenceComponent,
    output: OutputComponent,
    hints: HintBarComponent,
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

impl MainView {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent,
            sections: SelectorListComponent::new(ListKind::Sections),
            versions: SelectorListComponent::new(ListKind::Versions),
            reference: ReferenceComponent,
            output: OutputComponent::default(),
            hints: HintBarComponent::default(),
        }
    }

    fn focused_mut(&mut self, focus: Focus) -> &mut dyn Component {
        match focus {
            Focus::Sections => &mut self.sections,
            Focus::Versions => &mut self.versions,
            Focus::Output => &mut self.output,
        }
    }

    /// Global bindings first, then the focused component.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        app.status = None;
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Effect::Quit],
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            KeyCode::Tab => {
                app.focus = app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus = app.focus.previous();
                Vec::new()
            }
            KeyCode::Char('t') => vec![Effect::CycleTheme],
            KeyCode::Char('y') => vec![Effect::CopyToClipboard(app.binding.output().to_string())],
            _ => {
                let focus = app.focus;
                self.focused_mut(focus).handle_key_events(app, key)
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let area = frame.area();
        frame.render_widget(Block::default().style(th::background_style(&*app.theme.theme)), area);

        let controls = app.controls();
        let longest_list = controls.section_options.len().max(controls.version_options.len());
        let layout = MainLayout::compute(area, longest_list, app.binding.config().show_reference_label);

        self.header.render(frame, layout.header, app);
        self.sections.render(frame, layout.sections, app);
        self.versions.render(frame, layout.versions, app);
        if let Some(reference_area) = layout.reference {
            self.reference.render(frame, reference_area, app);
        }
        self.output.render(frame, layout.output, app);

        let focus = app.focus;
        self.hints.focused_hints = self.focused_mut(focus).get_hint_spans(app);
        self.hints.render(frame, layout.hints, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn tab_moves_focus_and_keys_reach_the_focused_list() {
        let mut app = test_app();
        let mut view = MainView::new();
        assert!(view.handle_key_events(&mut app, press(KeyCode::Tab)).is_empty());
        assert_eq!(app.focus, Focus::Versions);

        view.handle_key_events(&mut app, press(KeyCode::Down));
        assert_eq!(app.controls().selected_version.as_deref(), Some("v1"));
        assert_eq!(app.controls().selected_section.as_deref(), Some("Assay1"));

        view.handle_key_events(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Sections);
    }

    #[test]
    fn global_keys_produce_effects() {
        let mut app = test_app();
        let mut view = MainView::new();
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::Char('t'))), vec![Effect::CycleTheme]);
        assert_eq!(
            view.handle_key_events(&mut app, press(KeyCode::Char('y'))),
            vec![Effect::CopyToClipboard("\"RefX\"".to_string())]
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(view.handle_key_events(&mut app, ctrl_c), vec![Effect::Quit]);
    }

    #[test]
    fn key_press_clears_status() {
        let mut app = test_app();
        let mut view = MainView::new();
        app.status = Some("Copied".to_string());
        view.handle_key_events(&mut app, press(KeyCode::Down));
        assert_eq!(app.status, None);
    }

    #[test]
    fn renders_lists_reference_and_output() {
        let mut app = test_app();
        let mut view = MainView::new();
        app.choose_version(1);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| view.render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Select a section and version"));
        assert!(text.contains("Assay1"));
        assert!(text.contains("Assay2"));
        assert!(text.contains("RefX"));
        assert!(text.contains("\"scores\": [1,2,3]"));
        assert!(text.contains("Output (3 lines)"));
    }
}
