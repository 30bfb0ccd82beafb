//! Runtime: terminal lifecycle, the event loop and effect execution.
//!
//! Input arrives on crossterm's async `EventStream`; the loop also listens for
//! SIGINT so the terminal is restored even when raw mode swallows Ctrl+C.
//! Components never act on the outside world directly; they return
//! [`Effect`]s which `process_effects` executes here.
use std::io::Stdout;

use anyhow::Result;
use catsel_types::Effect;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, prelude::*};
use tokio::signal;
use tracing::{debug, info, warn};

use crate::app::App;
use crate::ui::main_view::MainView;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// What the loop should do after a batch of effects.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut CrosstermTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, app))?;
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()))
}

fn process_effects(app: &mut App, effects: Vec<Effect>) -> Flow {
    for effect in effects {
        match effect {
            Effect::Quit => return Flow::Exit,
            Effect::CopyToClipboard(text) => match copy_to_clipboard(&text) {
                Ok(()) => {
                    debug!(bytes = text.len(), "output copied to clipboard");
                    app.status = Some("Output copied to clipboard".to_string());
                }
                Err(error) => {
                    warn!(%error, "clipboard copy failed");
                    app.status = Some(format!("Clipboard error: {error}"));
                }
            },
            Effect::CycleTheme => app.status = Some(app.cycle_theme()),
            Effect::Status(message) => app.status = Some(message),
        }
    }
    Flow::Continue
}

/// Route one terminal event. Returns whether the screen needs a redraw.
fn handle_input_event(app: &mut App, main_view: &mut MainView, event: Event) -> (Flow, bool) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return (Flow::Exit, false);
            }
            let effects = main_view.handle_key_events(app, key);
            (process_effects(app, effects), true)
        }
        Event::Resize(..) => (Flow::Continue, true),
        _ => (Flow::Continue, false),
    }
}

/// Set up the terminal, run the event loop until the user quits, and restore
/// the terminal on the way out (also when drawing fails).
pub async fn run_app(mut app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app).await;
    cleanup_terminal(&mut terminal)?;
    info!("terminal restored");
    result
}

async fn event_loop(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    let mut main_view = MainView::new();
    let mut events = EventStream::new();
    render(terminal, app, &mut main_view)?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else {
                    debug!("input stream closed");
                    break;
                };
                let (flow, needs_render) = handle_input_event(app, &mut main_view, event?);
                if flow == Flow::Exit {
                    break;
                }
                if needs_render {
                    render(terminal, app, &mut main_view)?;
                }
            }
            _ = signal::ctrl_c() => break,
        }
    }
    Ok(())
}
