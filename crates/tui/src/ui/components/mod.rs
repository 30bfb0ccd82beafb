//! UI components: header, selection lists, reference label, output and hints.

pub mod component;
pub mod header;
pub mod hint_bar;
pub mod output;
pub mod reference;
pub mod selector_list;

pub use component::*;
pub use header::HeaderComponent;
pub use hint_bar::HintBarComponent;
pub use output::OutputComponent;
pub use reference::ReferenceComponent;
pub use selector_list::{ListKind, SelectorListComponent};
