//! Summary header
//!
//! Overall total, the active filter's total and record count, and the
//! theme mode.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the summary header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.theme.palette();
    let symbol = &app.settings.currency_symbol;
    let expenses = app.expenses.all();

    let total = app.expenses.total_amount();
    let filtered_total = app.filter.total(expenses);
    let count = app.filter.count(expenses);

    let block = Block::default()
        .title(" Expense Tracker ")
        .title_style(
            Style::default()
                .fg(palette.primary.into())
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border.into()))
        .style(Style::default().bg(palette.card.into()));

    let separator = Span::styled(" │ ", Style::default().fg(palette.border.into()));
    let line = Line::from(vec![
        Span::styled(" Total: ", Style::default().fg(palette.text_secondary.into())),
        Span::styled(
            total.format_with_symbol(symbol),
            Style::default()
                .fg(palette.primary.into())
                .add_modifier(Modifier::BOLD),
        ),
        separator.clone(),
        Span::styled(
            format!("{}: ", app.filter.label()),
            Style::default().fg(palette.text_secondary.into()),
        ),
        Span::styled(
            filtered_total.format_with_symbol(symbol),
            Style::default().fg(palette.text.into()),
        ),
        Span::styled(
            format!(" ({} {})", count, if count == 1 { "expense" } else { "expenses" }),
            Style::default().fg(palette.text_secondary.into()),
        ),
        separator,
        Span::styled(
            format!("{} mode", app.theme.mode_name()),
            Style::default().fg(palette.secondary.into()),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
