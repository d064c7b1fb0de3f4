use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Plain integer. The sign cue is the colour, not a `+` prefix.
#[must_use]
pub fn format_amount(amount: i64) -> String {
    amount.to_string()
}

/// Creates a styled span for an amount with semantic coloring.
///
/// - Positive amounts: green
/// - Negative amounts: red
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: i64, theme: &Theme) -> Span<'static> {
    Span::styled(format_amount(amount), Style::default().fg(amount_color(amount, theme)))
}

/// Same as [`styled_amount`], bold. Used for the total.
#[must_use]
pub fn styled_amount_bold(amount: i64, theme: &Theme) -> Span<'static> {
    Span::styled(
        format_amount(amount),
        Style::default()
            .fg(amount_color(amount, theme))
            .add_modifier(Modifier::BOLD),
    )
}

fn amount_color(amount: i64, theme: &Theme) -> ratatui::style::Color {
    match amount.signum() {
        1 => theme.positive,
        -1 => theme.negative,
        _ => theme.text,
    }
}
