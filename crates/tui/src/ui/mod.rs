//! UI rendering module for the TUI application.
//!
//! Layout, components, theme and the event-loop runtime.

pub mod components;
pub mod json_syntax;
pub mod layout;
pub mod main_view;
pub mod runtime;
pub mod theme;
