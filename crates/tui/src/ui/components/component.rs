//! Component system for the catsel TUI.
//!
//! Components are self-contained UI elements: they react to key events,
//! render themselves into a `Rect`, and report side effects back to the
//! runtime as [`Effect`]s instead of acting on them.

use catsel_types::Effect;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

/// A UI element with its own local behaviour.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: `handle_key_events()` runs while the component holds focus
/// 2. **Rendering**: `render()` draws into the provided area
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and render-local caches.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
