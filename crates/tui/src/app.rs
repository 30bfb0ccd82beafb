//! Application state for the catsel TUI.
//!
//! `App` owns the selector binding (whose [`ControlsSnapshot`] view is the
//! presentation model every component renders from), the active theme, the
//! focus position and a few bits of transient UI state.

use std::sync::Arc;

use catsel_engine::{BindingError, ControlsSnapshot, SelectorBinding};
use catsel_types::Effect;
use catsel_util::Settings;
use tracing::{info, warn};

use crate::ui::theme::{self, LoadedTheme, catalog};

/// Panels that can hold keyboard focus, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sections,
    Versions,
    Output,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sections => Focus::Versions,
            Focus::Versions => Focus::Output,
            Focus::Output => Focus::Sections,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Sections => Focus::Output,
            Focus::Versions => Focus::Sections,
            Focus::Output => Focus::Versions,
        }
    }
}

/// Static presentation options supplied by the caller.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Heading shown in the header bar.
    pub title: String,
    /// Free-form provenance text shown next to the title (e.g. load date).
    pub subtitle: String,
}

/// The main application state.
pub struct App {
    pub binding: SelectorBinding<ControlsSnapshot>,
    pub settings: Arc<Settings>,
    pub theme: LoadedTheme,
    pub focus: Focus,
    pub options: TuiOptions,
    /// First visible output line.
    pub output_scroll: u16,
    /// Transient message shown in the header; cleared on the next key press.
    pub status: Option<String>,
}

impl App {
    pub fn new(binding: SelectorBinding<ControlsSnapshot>, settings: Arc<Settings>, options: TuiOptions) -> Self {
        let theme = theme::load(settings.preferred_theme().as_deref());
        Self {
            binding,
            settings,
            theme,
            focus: Focus::default(),
            options,
            output_scroll: 0,
            status: None,
        }
    }

    pub fn controls(&self) -> &ControlsSnapshot {
        self.binding.view()
    }

    /// Select the section at `index` in the section list.
    pub fn choose_section(&mut self, index: usize) -> Vec<Effect> {
        let Some(name) = self.controls().section_options.get(index).cloned() else {
            return Vec::new();
        };
        let result = self.binding.select_section(&name);
        self.after_selection(result)
    }

    /// Select the version at `index` in the version list.
    pub fn choose_version(&mut self, index: usize) -> Vec<Effect> {
        let Some(name) = self.controls().version_options.get(index).cloned() else {
            return Vec::new();
        };
        let result = self.binding.select_version(&name);
        self.after_selection(result)
    }

    fn after_selection(&mut self, result: Result<(), BindingError>) -> Vec<Effect> {
        self.output_scroll = 0;
        match result {
            Ok(()) => Vec::new(),
            Err(error) => {
                warn!(%error, "selection failed");
                vec![Effect::Status(error.to_string())]
            }
        }
    }

    /// Number of lines in the current output.
    pub fn output_line_count(&self) -> usize {
        self.binding.output().lines().count()
    }

    /// Scroll the output by `delta` lines, clamped to the output length.
    pub fn scroll_output(&mut self, delta: i32) {
        let max = self.output_line_count().saturating_sub(1).min(u16::MAX as usize) as i32;
        let next = (self.output_scroll as i32 + delta).clamp(0, max);
        self.output_scroll = next as u16;
    }

    /// Switch to the next built-in theme and persist the choice.
    pub fn cycle_theme(&mut self) -> String {
        let next = catalog::next_after(self.theme.definition.id);
        self.theme = LoadedTheme::from_definition(next);
        info!(theme = next.id, "theme changed");
        if let Err(error) = self.settings.set_preferred_theme(Some(next.id.to_string())) {
            warn!(%error, "failed to persist theme preference");
            return format!("Theme: {} (not saved: {error})", next.label);
        }
        format!("Theme: {}", next.label)
    }
}
