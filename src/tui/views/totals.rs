//! Per-category totals panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, Money};
use crate::tui::app::App;

/// Render the totals panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.theme.palette();
    let symbol = &app.settings.currency_symbol;
    let totals = app.expenses.category_totals();

    let block = Block::default()
        .title(" By Category ")
        .title_style(Style::default().fg(palette.text.into()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border.into()))
        .style(Style::default().bg(palette.card.into()));

    let width = block.inner(area).width as usize;

    let mut lines: Vec<Line> = Category::ALL
        .iter()
        .map(|category| {
            let amount = totals.get(category).copied().unwrap_or_default();
            let value_style = if amount.is_zero() {
                Style::default().fg(palette.text_secondary.into())
            } else {
                Style::default().fg(palette.text.into())
            };
            total_line(
                Span::styled("■ ", Style::default().fg(palette.categories.get(*category).into())),
                category.name(),
                amount,
                symbol,
                width,
                value_style,
            )
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(total_line(
        Span::raw("  "),
        "Total",
        app.expenses.total_amount(),
        symbol,
        width,
        Style::default()
            .fg(palette.primary.into())
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// `marker name ...... amount` padded to `width`
fn total_line(
    marker: Span<'static>,
    name: &str,
    amount: Money,
    symbol: &str,
    width: usize,
    style: Style,
) -> Line<'static> {
    let amount = amount.format_with_symbol(symbol);
    let used = 2 + name.chars().count() + amount.chars().count();
    let padding = " ".repeat(width.saturating_sub(used).max(1));
    Line::from(vec![
        marker,
        Span::styled(format!("{}{}{}", name, padding, amount), style),
    ])
}
