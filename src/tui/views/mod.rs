//! TUI Views module
//!
//! The single screen: summary header, filter chips, expense list, category
//! totals and status bar, with dialogs and toasts drawn on top.

pub mod chips;
pub mod expense_list;
pub mod status_bar;
pub mod summary;
pub mod totals;

use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::notification::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background.into())),
        area,
    );

    let layout = AppLayout::new(area);

    summary::render(frame, app, layout.header);
    chips::render(frame, app, layout.chips);
    expense_list::render(frame, app, layout.list);
    totals::render(frame, app, layout.totals);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let width = 40.min(area.width);
        let toast = Rect::new(area.x + area.width - width, area.y + 1, width, 4).intersection(area);
        frame.render_widget(NotificationWidget::new(notification, palette), toast);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            dialogs::expense::render(frame, app)
        }
        ActiveDialog::None => {}
    }
}
