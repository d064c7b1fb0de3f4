use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub mod common {
    use super::KeyHint;

    /// Cursor on the new-entry row.
    pub fn new_entry() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "add"),
            KeyHint::new("Tab", "next"),
            KeyHint::new("Esc", "leave"),
        ]
    }

    /// Cursor on an existing entry.
    pub fn entry_row() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "done"),
            KeyHint::new("Tab", "next"),
            KeyHint::new("Ctrl+D", "delete"),
        ]
    }

    /// Nothing focused.
    pub fn idle() -> Vec<KeyHint> {
        vec![KeyHint::new("Tab", "edit"), KeyHint::new("q", "quit")]
    }

    pub fn global() -> Vec<KeyHint> {
        vec![KeyHint::new("Ctrl+C", "quit")]
    }
}
