//! Status bar view
//!
//! Shows the selected record and key hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.theme.palette();

    let mut spans = vec![];

    match app.selected_expense() {
        Some(expense) => {
            spans.push(Span::styled(
                format!(" {} ", expense.id.short()),
                Style::default().fg(palette.text_secondary.into()),
            ));
            spans.push(Span::styled(
                expense.title.clone(),
                Style::default().fg(palette.text.into()),
            ));
            if app.swipe.revealed().is_some() {
                spans.push(Span::styled(
                    "  d:Delete  l:Cancel",
                    Style::default().fg(palette.error.into()),
                ));
            }
        }
        None => spans.push(Span::styled(
            " No selection",
            Style::default().fg(palette.text_secondary.into()),
        )),
    }

    // Key hints (right-aligned)
    let hints = " a:Add  e:Edit  h:Swipe  [/]:Filter  t:Theme  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.secondary.into())));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.input_background.into()));

    frame.render_widget(paragraph, area);
}
