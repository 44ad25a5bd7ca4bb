//! Help dialog
//!
//! Lists every keybinding, grouped by context.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Palette;
use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(palette.primary.into())
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border.into()))
        .style(Style::default().bg(palette.card.into()));

    let paragraph = Paragraph::new(help_lines(palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help text generated from the keybinding table
fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in [KeyContext::Global, KeyContext::List, KeyContext::Form] {
        lines.push(Line::from(vec![Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(palette.secondary.into()),
        )]));
        for kb in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(kb), kb.description, palette));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![Span::styled(
        "Mouse: drag a row left to reveal Delete, click a chip to filter",
        Style::default().fg(palette.text_secondary.into()),
    )]));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(palette.text_secondary.into()),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(palette.primary.into())),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(palette.text.into())),
    ])
}
