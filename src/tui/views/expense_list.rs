//! Expense list view
//!
//! One row per record in the active filter. A swiped row slides left over
//! a red delete button; once fully revealed the button's rectangle is
//! recorded so a click can hit it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::filter::CategoryFilter;
use crate::models::{Expense, Palette};
use crate::tui::app::App;
use crate::tui::widgets::swipe::DELETE_BUTTON_WIDTH;

const DATE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 14;
const AMOUNT_WIDTH: usize = 11;

/// Render the expense list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(format!(" Expenses: {} ", app.filter.label()))
        .title_style(Style::default().fg(palette.text.into()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border.into()))
        .style(Style::default().bg(palette.card.into()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.hit_areas.list = inner;
    app.hit_areas.delete_button = None;

    let count = app.visible_expenses().len();
    if count == 0 {
        let message = match app.filter {
            CategoryFilter::All => "No expenses yet. Press 'a' to add one.".to_string(),
            filter => format!("No expenses in {}", filter.label()),
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.text_secondary.into()));
        frame.render_widget(empty, inner);
        return;
    }

    app.ensure_visible(inner.height as usize);

    let mut delete_button = None;
    {
        let visible = app.visible_expenses();
        let end = (app.scroll_offset + inner.height as usize).min(visible.len());

        for (index, expense) in visible
            .iter()
            .enumerate()
            .take(end)
            .skip(app.scroll_offset)
        {
            let row = Rect::new(
                inner.x,
                inner.y + (index - app.scroll_offset) as u16,
                inner.width,
                1,
            );
            let offset = app.swipe.offset_for(index).min(row.width);
            let content = Rect::new(row.x, row.y, row.width - offset, 1);

            let line = row_line(
                expense,
                index == app.selected_index,
                content.width as usize,
                app.settings.date_format.as_str(),
                app.settings.currency_symbol.as_str(),
                palette,
            );
            frame.render_widget(Paragraph::new(line), content);

            if offset > 0 {
                let button = Rect::new(row.x + row.width - offset, row.y, offset, 1);
                let label = if offset >= DELETE_BUTTON_WIDTH { "Delete" } else { "" };
                frame.render_widget(
                    Paragraph::new(label)
                        .alignment(Alignment::Center)
                        .style(
                            Style::default()
                                .fg(palette.card.into())
                                .bg(palette.swipe_delete.into())
                                .add_modifier(Modifier::BOLD),
                        ),
                    button,
                );
                if app.swipe.is_revealed(index) && offset >= DELETE_BUTTON_WIDTH {
                    delete_button = Some((index, button));
                }
            }
        }
    }
    app.hit_areas.delete_button = delete_button;
}

/// One list row: marker, date, title, category and amount fitted to `width`
fn row_line(
    expense: &Expense,
    selected: bool,
    width: usize,
    date_format: &str,
    symbol: &str,
    palette: &Palette,
) -> Line<'static> {
    let base = if selected {
        Style::default()
            .bg(palette.input_background.into())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let marker = if selected { "▶ " } else { "  " };
    let date = expense.created_at.format(date_format).to_string();
    let amount = expense.amount.format_with_symbol(symbol);
    let title_width = width.saturating_sub(2 + DATE_WIDTH + 1 + CATEGORY_WIDTH + AMOUNT_WIDTH + 1);

    let spans = vec![
        Span::styled(marker, base.fg(palette.primary.into())),
        Span::styled(
            format!("{} ", fit(&date, DATE_WIDTH)),
            base.fg(palette.text_secondary.into()),
        ),
        Span::styled(fit(&expense.title, title_width), base.fg(palette.text.into())),
        Span::styled(
            format!(" {}", fit(expense.category.name(), CATEGORY_WIDTH)),
            base.fg(palette.categories.get(expense.category).into()),
        ),
        Span::styled(
            format!("{:>width$}", amount, width = AMOUNT_WIDTH),
            base.fg(palette.text.into()),
        ),
    ];

    let mut line = Line::from(spans);
    if line.width() < width {
        line.spans
            .push(Span::styled(" ".repeat(width - line.width()), base));
    }
    line
}

/// Pad or truncate to exactly `width` characters
fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        format!("{}{}", s, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Gas", 5), "Gas  ");
        assert_eq!(fit("Grocery Shopping", 8), "Grocery…");
        assert_eq!(fit("Café au lait", 4), "Caf…");
        assert_eq!(fit("anything", 0), "");
    }
}
