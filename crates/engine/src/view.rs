//! Presentation seam for the selector binding.

/// Sink the binding pushes its state into.
///
/// Implementations are pure presentation: the binding never reads a value
/// back from the view. Calls arrive in the order a user would see the
/// controls change: options first, then the selected value, then the
/// reference label and the output.
pub trait SelectorView {
    /// Replace the section control's options.
    fn set_section_options(&mut self, options: &[String]);
    /// Mark `section` as the selected section option.
    fn set_selected_section(&mut self, section: &str);
    /// Replace the version control's options.
    fn set_version_options(&mut self, options: &[String]);
    /// Mark `version` as selected, or clear the selection when the list is empty.
    fn set_selected_version(&mut self, version: Option<&str>);
    /// Update the auxiliary reference label. Only called when the label is enabled.
    fn set_reference_label(&mut self, label: &str);
    /// Replace the output display text.
    fn set_output(&mut self, output: &str);
}

/// A view with no presentation at all.
impl SelectorView for () {
    fn set_section_options(&mut self, _options: &[String]) {}
    fn set_selected_section(&mut self, _section: &str) {}
    fn set_version_options(&mut self, _options: &[String]) {}
    fn set_selected_version(&mut self, _version: Option<&str>) {}
    fn set_reference_label(&mut self, _label: &str) {}
    fn set_output(&mut self, _output: &str) {}
}

/// In-memory record of what each control currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlsSnapshot {
    pub section_options: Vec<String>,
    pub selected_section: Option<String>,
    pub version_options: Vec<String>,
    pub selected_version: Option<String>,
    pub reference_label: Option<String>,
    pub output: String,
    /// Number of times the output display was written.
    pub output_writes: usize,
}

impl ControlsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the selected section within the section options.
    pub fn selected_section_index(&self) -> Option<usize> {
        let selected = self.selected_section.as_deref()?;
        self.section_options.iter().position(|option| option == selected)
    }

    /// Position of the selected version within the version options.
    pub fn selected_version_index(&self) -> Option<usize> {
        let selected = self.selected_version.as_deref()?;
        self.version_options.iter().position(|option| option == selected)
    }
}

impl SelectorView for ControlsSnapshot {
    fn set_section_options(&mut self, options: &[String]) {
        self.section_options = options.to_vec();
    }

    fn set_selected_section(&mut self, section: &str) {
        self.selected_section = Some(section.to_string());
    }

    fn set_version_options(&mut self, options: &[String]) {
        self.version_options = options.to_vec();
        self.selected_version = None;
    }

    fn set_selected_version(&mut self, version: Option<&str>) {
        self.selected_version = version.map(str::to_string);
    }

    fn set_reference_label(&mut self, label: &str) {
        self.reference_label = Some(label.to_string());
    }

    fn set_output(&mut self, output: &str) {
        self.output = output.to_string();
        self.output_writes += 1;
    }
}
