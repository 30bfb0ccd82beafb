//! Syntax highlighting for the formatted entry shown in the output pane.
//!
//! Works line by line on text that is already formatted, so it also copes
//! with the compacted array form, which is not strictly pretty-printed JSON.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Whitespace,
    Key,
    String,
    Number,
    Keyword,
    Punctuation,
    Other,
}

/// Split `text` into highlighted lines.
pub fn highlight_lines<'a>(text: &'a str, theme: &dyn Theme) -> Vec<Line<'a>> {
    text.lines()
        .map(|line| {
            let spans: Vec<Span<'a>> = tokenize(line)
                .into_iter()
                .map(|(kind, token)| Span::styled(token, style_for(kind, theme)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn style_for(kind: TokenKind, theme: &dyn Theme) -> Style {
    match kind {
        TokenKind::Key => theme.syntax_key_style(),
        TokenKind::String => theme.syntax_string_style(),
        TokenKind::Number => theme.syntax_number_style(),
        TokenKind::Keyword => theme.syntax_keyword_style(),
        TokenKind::Punctuation => theme.syntax_punctuation_style(),
        TokenKind::Whitespace | TokenKind::Other => theme.text_primary_style(),
    }
}

fn tokenize(line: &str) -> Vec<(TokenKind, &str)> {
    let mut tokens = Vec::new();
    let mut rest = line;
    while let Some(first) = rest.chars().next() {
        let (kind, length) = match first {
            c if c.is_whitespace() => (
                TokenKind::Whitespace,
                rest.find(|candidate: char| !candidate.is_whitespace()).unwrap_or(rest.len()),
            ),
            '"' => {
                let length = string_literal_length(rest);
                let is_key = rest[length..].trim_start().starts_with(':');
                (if is_key { TokenKind::Key } else { TokenKind::String }, length)
            }
            '{' | '}' | '[' | ']' | ':' | ',' => (TokenKind::Punctuation, 1),
            '-' | '0'..='9' => (TokenKind::Number, number_length(rest).max(1)),
            _ => match keyword_length(rest) {
                Some(length) => (TokenKind::Keyword, length),
                None => (TokenKind::Other, first.len_utf8()),
            },
        };
        tokens.push((kind, &rest[..length]));
        rest = &rest[length..];
    }
    tokens
}

/// Byte length of the string literal at the start of `input`, closing quote
/// included. An unterminated literal runs to the end of the line.
fn string_literal_length(input: &str) -> usize {
    let mut escaped = false;
    for (index, character) in input.char_indices().skip(1) {
        match character {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return index + 1,
            _ => {}
        }
    }
    input.len()
}

fn number_length(input: &str) -> usize {
    input
        .find(|candidate: char| !(candidate.is_ascii_digit() || matches!(candidate, '-' | '+' | '.' | 'e' | 'E')))
        .unwrap_or(input.len())
}

fn keyword_length(input: &str) -> Option<usize> {
    ["true", "false", "null"].into_iter().find_map(|keyword| {
        let rest = input.strip_prefix(keyword)?;
        let boundary = rest
            .chars()
            .next()
            .is_none_or(|next| !next.is_ascii_alphanumeric() && next != '_');
        boundary.then_some(keyword.len())
    })
}
