//! # Catsel TUI
//!
//! Terminal frontend for the catalog selector. A section list, a version
//! list, an optional reference panel and a highlighted output pane mirror the
//! [`ControlsSnapshot`] that the selector binding keeps up to date; moving
//! either list highlight selects through the binding.
//!
//! ## Keys
//!
//! - `Tab` / `Shift+Tab` move focus between the lists and the output
//! - `↑`/`↓`, `Home`/`End` change the focused selection or scroll the output
//! - `y` copies the output, `t` cycles the theme, `q` quits

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use catsel_engine::{ControlsSnapshot, SelectorBinding};
use catsel_util::Settings;

pub use app::TuiOptions;

/// Runs the interactive selector until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be switched into or out of raw mode, or
/// when reading input or drawing a frame fails.
pub async fn run(binding: SelectorBinding<ControlsSnapshot>, settings: Arc<Settings>, options: TuiOptions) -> Result<()> {
    let app = app::App::new(binding, settings, options);
    ui::runtime::run_app(app).await
}
