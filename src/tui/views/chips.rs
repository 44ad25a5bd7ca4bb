//! Category filter chips
//!
//! "All" then each category with its record count. Chip rectangles are
//! recorded for mouse selection.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::filter::{chip_counts, CategoryFilter, ChipCount};
use crate::tui::app::App;

/// Render the chip row
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.theme.palette();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border.into()))
        .style(Style::default().bg(palette.background.into()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.hit_areas.chips.clear();

    let chips: Vec<(ChipCount, String)> = chip_counts(app.expenses.all())
        .into_iter()
        .map(|chip| (chip, format!(" {} ({}) ", chip.filter.label(), chip.count)))
        .collect();

    let start = first_visible(&chips, app.filter, inner.width);
    let mut x = inner.x;
    let right = inner.x + inner.width;
    for (chip, label) in chips.into_iter().skip(start) {
        let width = label.chars().count() as u16;
        if x + width > right {
            break;
        }

        let accent = match chip.filter {
            CategoryFilter::All => palette.primary,
            CategoryFilter::Only(category) => palette.categories.get(category),
        };
        let style = if chip.filter == app.filter {
            Style::default()
                .fg(palette.background.into())
                .bg(accent.into())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(accent.into())
                .bg(palette.input_background.into())
        };

        let rect = Rect::new(x, inner.y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        app.hit_areas.chips.push((chip.filter, rect));

        x += width + 1;
    }
}

/// Index of the first chip to draw so the selected chip fits in `width`
fn first_visible(chips: &[(ChipCount, String)], selected: CategoryFilter, width: u16) -> usize {
    let Some(selected_index) = chips.iter().position(|(chip, _)| chip.filter == selected) else {
        return 0;
    };

    let mut start = 0;
    loop {
        let used: usize = chips[start..=selected_index]
            .iter()
            .map(|(_, label)| label.chars().count() + 1)
            .sum();
        if used <= width as usize + 1 || start == selected_index {
            return start;
        }
        start += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::store::ExpenseStore;

    #[test]
    fn test_first_visible_scrolls_to_selection() {
        let store = ExpenseStore::seeded();
        let chips: Vec<(ChipCount, String)> = chip_counts(store.all())
            .into_iter()
            .map(|chip| (chip, format!(" {} ({}) ", chip.filter.label(), chip.count)))
            .collect();

        assert_eq!(first_visible(&chips, CategoryFilter::All, 40), 0);
        assert_eq!(
            first_visible(&chips, CategoryFilter::Only(Category::Food), 200),
            0
        );
        let start = first_visible(&chips, CategoryFilter::Only(Category::Other), 40);
        assert!(start > 0);
        let used: usize = chips[start..]
            .iter()
            .map(|(_, label)| label.chars().count() + 1)
            .sum();
        assert!(used <= 41);
    }
}
