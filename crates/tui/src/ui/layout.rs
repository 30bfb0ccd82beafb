//! Screen layout for the selector.
//!
//! ```text
//! ┌ header (title, provenance, status) ───────────────┐
//! │ Section │ Version │ Reference (annotated only)    │
//! │ Output                                             │
//! │ hints                                              │
//! ```
use ratatui::prelude::*;

/// Areas for each panel of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub sections: Rect,
    pub versions: Rect,
    /// `None` when the reference label is disabled.
    pub reference: Option<Rect>,
    pub output: Rect,
    pub hints: Rect,
}

impl MainLayout {
    /// Split `size` into panels. The selector row grows with the longest
    /// option list up to a third of the screen; the output takes the rest.
    pub fn compute(size: Rect, longest_list: usize, show_reference: bool) -> Self {
        let list_height = u16::try_from(longest_list).unwrap_or(u16::MAX).saturating_add(2).clamp(3, (size.height / 3).max(3));
        let [header, selectors, output, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(list_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(size);

        let (sections, versions, reference) = if show_reference {
            let [sections, versions, reference] = Layout::horizontal([
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
            ])
            .areas(selectors);
            (sections, versions, Some(reference))
        } else {
            let [sections, versions] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(selectors);
            (sections, versions, None)
        };

        Self {
            header,
            sections,
            versions,
            reference,
            output,
            hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_panel_only_when_enabled() {
        let size = Rect::new(0, 0, 100, 40);
        assert!(MainLayout::compute(size, 3, true).reference.is_some());
        assert!(MainLayout::compute(size, 3, false).reference.is_none());
    }

    #[test]
    fn selector_row_is_capped_at_a_third_of_the_screen() {
        let size = Rect::new(0, 0, 100, 30);
        let layout = MainLayout::compute(size, 50, true);
        assert_eq!(layout.sections.height, 10);
        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.hints.height, 1);
        assert_eq!(layout.output.height, 30 - 2 - 10 - 1);
    }

    #[test]
    fn huge_option_lists_still_fill_the_capped_row() {
        let size = Rect::new(0, 0, 100, 30);
        let layout = MainLayout::compute(size, 65_536, false);
        assert_eq!(layout.sections.height, 10);
    }
}
