pub mod components;
pub mod keymap;

mod terminal;
mod theme;

use engine::{Entry, FieldId, State};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::App,
    focus::{Focus, field_text},
};
use components::{amount, card::Card, hints};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

const DESC_LABEL: &str = "Description: ";
const VALUE_LABEL: &str = "  Value: ";
const ID_WIDTH: u16 = 6;
const VALUE_WIDTH: u16 = 12;
const MIN_DESC_WIDTH: u16 = 8;

pub fn render(frame: &mut Frame<'_>, app: &App) {
    let theme = Theme::default();
    let state = app.state();
    let focus = app.focus();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(3), // New entry
            Constraint::Min(3),    // Entries
            Constraint::Length(1), // Total
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    render_info_bar(frame, layout[0], state, &theme);
    render_new_entry(frame, layout[1], state, focus, &theme);
    render_entries(frame, layout[2], state, focus, &theme);
    render_total(frame, layout[3], state, &theme);
    render_hints(frame, layout[4], focus, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &State, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            "Tally",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Entries", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.entries.len())),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_new_entry(frame: &mut Frame<'_>, area: Rect, state: &State, focus: &Focus, theme: &Theme) {
    let focused = focus.current().is_some_and(FieldId::is_new_entry_row);
    let card = Card::new("New entry", theme).focused(focused);
    let inner = card.inner(area);

    let fixed = DESC_LABEL.len() as u16 + VALUE_LABEL.len() as u16 + VALUE_WIDTH;
    let desc_width = inner.width.saturating_sub(fixed).max(MIN_DESC_WIDTH);

    let line = Line::from(vec![
        Span::styled(DESC_LABEL, Style::default().fg(theme.dim)),
        input_span(FieldId::NewDescription, state, focus, desc_width, theme),
        Span::styled(VALUE_LABEL, Style::default().fg(theme.dim)),
        input_span(FieldId::NewValue, state, focus, VALUE_WIDTH, theme),
    ]);
    frame.render_widget(Paragraph::new(line).block(card.block()), area);

    match focus.current() {
        Some(FieldId::NewDescription) => {
            place_cursor(frame, inner.x + DESC_LABEL.len() as u16, inner.y, desc_width, focus);
        }
        Some(FieldId::NewValue) => {
            let x = inner.x + DESC_LABEL.len() as u16 + desc_width + VALUE_LABEL.len() as u16;
            place_cursor(frame, x, inner.y, VALUE_WIDTH, focus);
        }
        _ => {}
    }
}

fn render_entries(frame: &mut Frame<'_>, area: Rect, state: &State, focus: &Focus, theme: &Theme) {
    let focused_row = focus
        .current()
        .and_then(FieldId::entry_id)
        .and_then(|id| state.entries.iter().position(|entry| entry.id == id));
    let card = Card::new("Entries", theme).focused(focused_row.is_some());
    let inner = card.inner(area);

    if state.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No entries yet.",
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Center)
        .block(card.block());
        frame.render_widget(empty, area);
        return;
    }

    let desc_width = inner
        .width
        .saturating_sub(ID_WIDTH + 1 + VALUE_WIDTH)
        .max(MIN_DESC_WIDTH);
    let lines: Vec<Line<'_>> = state
        .entries
        .iter()
        .map(|entry| entry_line(entry, state, focus, desc_width, theme))
        .collect();

    // Keep the focused row on screen.
    let offset = focused_row
        .map(|row| (row as u16).saturating_sub(inner.height.saturating_sub(1)))
        .unwrap_or(0);
    frame.render_widget(
        Paragraph::new(lines).block(card.block()).scroll((offset, 0)),
        area,
    );

    if let (Some(row), Some(field)) = (focused_row, focus.current()) {
        let y = inner.y + row as u16 - offset;
        match field {
            FieldId::EntryDescription(_) => {
                place_cursor(frame, inner.x + ID_WIDTH, y, desc_width, focus);
            }
            FieldId::EntryValue(_) => {
                place_cursor(frame, inner.x + ID_WIDTH + desc_width + 1, y, VALUE_WIDTH, focus);
            }
            _ => {}
        }
    }
}

fn entry_line(
    entry: &Entry,
    state: &State,
    focus: &Focus,
    desc_width: u16,
    theme: &Theme,
) -> Line<'static> {
    let value_field = FieldId::EntryValue(entry.id);
    let value = if focus.current() == Some(value_field) {
        input_span(value_field, state, focus, VALUE_WIDTH, theme)
    } else {
        let mut span = amount::styled_amount(entry.value, theme);
        span.content = fit(&span.content, VALUE_WIDTH).into();
        span
    };

    Line::from(vec![
        Span::styled(
            fit(&format!("#{}", entry.id), ID_WIDTH),
            Style::default().fg(theme.dim),
        ),
        input_span(FieldId::EntryDescription(entry.id), state, focus, desc_width, theme),
        Span::raw(" "),
        value,
    ])
}

fn render_total(frame: &mut Frame<'_>, area: Rect, state: &State, theme: &Theme) {
    if state.is_empty() {
        return;
    }
    let line = Line::from(vec![
        Span::styled(" Total: ", Style::default().fg(theme.dim)),
        amount::styled_amount_bold(state.total(), theme),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints(frame: &mut Frame<'_>, area: Rect, focus: &Focus, theme: &Theme) {
    let context = match focus.current() {
        Some(field) if field.is_new_entry_row() => hints::common::new_entry(),
        Some(_) => hints::common::entry_row(),
        None => hints::common::idle(),
    };
    let mut parts = hints::hints_to_spans(&context, theme);
    parts.push(hints::hint_separator(theme));
    parts.extend(hints::hints_to_spans(&hints::common::global(), theme));
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// An input cell. The focused one shows its draft, the others the ledger.
fn input_span(
    field: FieldId,
    state: &State,
    focus: &Focus,
    width: u16,
    theme: &Theme,
) -> Span<'static> {
    if focus.current() == Some(field) {
        return Span::styled(
            fit(tail(focus.draft(), width), width),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::UNDERLINED),
        );
    }
    let text = field_text(field, state).unwrap_or_default();
    Span::styled(fit(&text, width), Style::default().fg(theme.text))
}

fn place_cursor(frame: &mut Frame<'_>, x: u16, y: u16, width: u16, focus: &Focus) {
    let typed = focus.draft().chars().count() as u16;
    let offset = typed.min(width.saturating_sub(1));
    frame.set_cursor_position((x + offset, y));
}

/// Last `width - 1` chars, so the cursor cell after the text stays visible.
fn tail(text: &str, width: u16) -> &str {
    let keep = width.saturating_sub(1) as usize;
    let count = text.chars().count();
    if count <= keep {
        return text;
    }
    let skip = count - keep;
    match text.char_indices().nth(skip) {
        Some((index, _)) => &text[index..],
        None => "",
    }
}

/// Truncates or pads to exactly `width` chars.
fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}
