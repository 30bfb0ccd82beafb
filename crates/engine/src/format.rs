//! Entry formatting for the output display.
//!
//! Entries are pretty-printed as JSON with two-space indentation. The
//! annotated variant then runs a compaction pass that pulls multi-line arrays
//! back onto a single line.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

/// An array whose pretty-printed form spans several lines: an opening bracket
/// followed by whitespace, then anything (newlines and inline `]` included) up
/// to the first closing bracket that starts its own line.
static MULTILINE_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[\s+.*?\s+\]").expect("multi-line array pattern is valid"));

/// Render `entry` for display, optionally collapsing multi-line arrays.
pub fn format_entry(entry: &Value, compact: bool) -> Result<String, serde_json::Error> {
    let pretty = serde_json::to_string_pretty(entry)?;
    if compact {
        Ok(compact_arrays(&pretty))
    } else {
        Ok(pretty)
    }
}

/// Collapse every multi-line array block in `pretty`.
///
/// All whitespace inside a matched block is removed, including whitespace
/// inside string literals, and a comma left directly before the closing
/// bracket is dropped.
pub fn compact_arrays(pretty: &str) -> String {
    MULTILINE_ARRAY
        .replace_all(pretty, |caps: &Captures| {
            let collapsed: String = caps[0].chars().filter(|character| !character.is_whitespace()).collect();
            match collapsed.strip_suffix(",]") {
                Some(head) => format!("{head}]"),
                None => collapsed,
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_output_is_two_space_pretty_json() {
        let text = format_entry(&json!({"scores": [1, 2]}), false).unwrap();
        assert_eq!(text, "{\n  \"scores\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn compaction_pulls_arrays_onto_one_line() {
        let text = format_entry(&json!({"scores": [1, 2, 3], "name": "x"}), true).unwrap();
        assert_eq!(text, "{\n  \"scores\": [1,2,3],\n  \"name\": \"x\"\n}");
    }

    #[test]
    fn compaction_leaves_scalars_and_empty_arrays_alone() {
        assert_eq!(format_entry(&json!("RefX"), true).unwrap(), "\"RefX\"");
        assert_eq!(format_entry(&json!({"empty": []}), true).unwrap(), "{\n  \"empty\": []\n}");
        assert_eq!(format_entry(&json!(null), true).unwrap(), "null");
    }

    #[test]
    fn trailing_comma_before_bracket_is_removed() {
        assert_eq!(compact_arrays("[\n  1,\n  2,\n]"), "[1,2]");
    }

    #[test]
    fn nested_arrays_collapse_innermost_first() {
        let text = format_entry(&json!([[1, 2], [3]]), true).unwrap();
        assert_eq!(text, "[[1,2],\n  [3]\n]");
    }

    #[test]
    fn arrays_holding_an_empty_array_are_compacted() {
        let text = format_entry(&json!({"x": [{"y": []}, 1]}), true).unwrap();
        assert_eq!(text, "{\n  \"x\": [{\"y\":[]},1]\n}");
    }

    #[test]
    fn bracket_inside_a_string_does_not_end_the_block() {
        let text = format_entry(&json!(["a]b", "c"]), true).unwrap();
        assert_eq!(text, "[\"a]b\",\"c\"]");
    }

    #[test]
    fn whitespace_inside_strings_is_removed_too() {
        let text = format_entry(&json!({"wf": ["bam merge", "star"]}), true).unwrap();
        assert_eq!(text, "{\n  \"wf\": [\"bammerge\",\"star\"]\n}");
    }
}
