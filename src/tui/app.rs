//! Application state for the TUI
//!
//! The App struct owns both stores plus all transient view state, and is
//! passed to every render and event handler.

use std::time::Duration;

use ratatui::layout::{Position, Rect};
use tracing::info;

use crate::config::Settings;
use crate::filter::CategoryFilter;
use crate::models::{Expense, ExpenseId};
use crate::store::{ExpenseStore, ThemeStore};

use super::dialogs::expense::ExpenseFormState;
use super::widgets::notification::NotificationQueue;
use super::widgets::swipe::SwipeState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditExpense(ExpenseId),
    Help,
}

/// Screen regions recorded during the last render, for mouse hit-testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Rows of the expense list (inside the border)
    pub list: Rect,
    pub chips: Vec<(CategoryFilter, Rect)>,
    /// The revealed delete button and the row it belongs to
    pub delete_button: Option<(usize, Rect)>,
}

impl HitAreas {
    /// Visible-list index of the row under the pointer
    pub fn row_at(&self, column: u16, row: u16, scroll_offset: usize) -> Option<usize> {
        if !self.list.contains(Position::new(column, row)) {
            return None;
        }
        Some(scroll_offset + (row - self.list.y) as usize)
    }

    pub fn chip_at(&self, column: u16, row: u16) -> Option<CategoryFilter> {
        self.chips
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(filter, _)| *filter)
    }

    pub fn delete_button_at(&self, column: u16, row: u16) -> Option<usize> {
        self.delete_button
            .filter(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(index, _)| index)
    }
}

/// Main application state
pub struct App<'a> {
    /// Expense records for this session
    pub expenses: ExpenseStore,

    /// Light/dark mode
    pub theme: ThemeStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Active category filter
    pub filter: CategoryFilter,

    /// Selected index into the filtered list
    pub selected_index: usize,

    /// First visible row of the list
    pub scroll_offset: usize,

    /// Swipe-to-delete gesture
    pub swipe: SwipeState,

    /// Add/edit form state
    pub expense_form: ExpenseFormState,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Regions from the last frame
    pub hit_areas: HitAreas,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(expenses: ExpenseStore, settings: &'a Settings) -> Self {
        Self {
            expenses,
            theme: ThemeStore::new(),
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            filter: CategoryFilter::default(),
            selected_index: 0,
            scroll_offset: 0,
            swipe: SwipeState::new(),
            expense_form: ExpenseFormState::new(),
            notifications: NotificationQueue::new(Duration::from_secs(
                settings.notification_secs,
            )),
            hit_areas: HitAreas::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records passing the active filter, in collection order
    pub fn visible_expenses(&self) -> Vec<&Expense> {
        self.filter.apply(self.expenses.all())
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.visible_expenses().get(self.selected_index).copied()
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new();
            }
            ActiveDialog::EditExpense(id) => match self.expenses.get(id) {
                Some(expense) => self.expense_form = ExpenseFormState::from_expense(expense),
                None => {
                    self.notifications.error(format!("Expense not found: {}", id));
                    return;
                }
            },
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.swipe.reset();
        self.active_dialog = dialog;
    }

    /// Open the edit form for the selected row
    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_expense().map(|e| e.id.clone()) {
            self.open_dialog(ActiveDialog::EditExpense(id));
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Validate the form and create or update
    ///
    /// On validation failure the errors stay on the form and the dialog
    /// stays open. Returns whether the dialog closed.
    pub fn submit_form(&mut self) -> bool {
        let form = self.expense_form.to_form();

        match self.active_dialog.clone() {
            ActiveDialog::AddExpense => match form.to_new_expense() {
                Ok(input) => {
                    let expense = self.expenses.create(input);
                    let message = format!("Added \"{}\" ({})", expense.title, self.money(&expense));
                    self.notifications.success(message);
                    self.selected_index = 0;
                    self.scroll_offset = 0;
                }
                Err(errors) => {
                    self.expense_form.errors = errors;
                    return false;
                }
            },
            ActiveDialog::EditExpense(id) => match form.to_update() {
                Ok(update) => match self.expenses.update(&id, update) {
                    Ok(expense) => self
                        .notifications
                        .success(format!("Updated \"{}\"", expense.title)),
                    Err(e) => self.notifications.error(e.to_string()),
                },
                Err(errors) => {
                    self.expense_form.errors = errors;
                    return false;
                }
            },
            ActiveDialog::Help | ActiveDialog::None => return false,
        }

        self.close_dialog();
        self.clamp_selection();
        true
    }

    /// Delete the row whose delete button is showing
    pub fn delete_revealed(&mut self) {
        let Some(row) = self.swipe.revealed() else {
            return;
        };
        let id = self.visible_expenses().get(row).map(|e| e.id.clone());
        self.swipe.reset();

        match id {
            Some(id) => self.delete_expense(&id),
            None => self.notifications.error("Nothing to delete"),
        }
    }

    pub fn delete_expense(&mut self, id: &ExpenseId) {
        match self.expenses.delete(id) {
            Ok(expense) => self
                .notifications
                .success(format!("Deleted \"{}\"", expense.title)),
            Err(e) => self.notifications.error(e.to_string()),
        }
        self.clamp_selection();
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        info!(mode = self.theme.mode_name(), "theme changed");
        self.notifications
            .info(format!("{} mode", self.theme.mode_name()));
    }

    /// Switch the category filter and start from the top
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.swipe.reset();
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    /// Reveal the delete button of the selected row
    pub fn reveal_selected(&mut self) {
        if self.selected_index < self.visible_expenses().len() {
            self.swipe.reveal(self.selected_index);
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.swipe.reset();
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        self.swipe.reset();
        let max = self.visible_expenses().len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.swipe.reset();
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.swipe.reset();
        self.selected_index = self.visible_expenses().len().saturating_sub(1);
    }

    /// Select a row directly (mouse)
    pub fn select(&mut self, index: usize) {
        if index < self.visible_expenses().len() {
            self.selected_index = index;
        }
    }

    /// Keep the selection inside the filtered list after it shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.visible_expenses().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Scroll so the selected row is within `height` visible rows
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + height {
            self.scroll_offset = self.selected_index + 1 - height;
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    fn money(&self, expense: &Expense) -> String {
        expense
            .amount
            .format_with_symbol(&self.settings.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::tui::widgets::notification::NotificationType;

    fn type_into(app: &mut App, title: &str, amount: &str) {
        app.expense_form.title_input = app.expense_form.title_input.clone().content(title);
        app.expense_form.amount_input = app.expense_form.amount_input.clone().content(amount);
    }

    #[test]
    fn test_add_through_form() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);

        app.open_dialog(ActiveDialog::AddExpense);
        type_into(&mut app, "Coffee", "4.5");
        assert!(app.submit_form());

        assert!(!app.has_dialog());
        assert_eq!(app.expenses.len(), 5);
        assert_eq!(app.visible_expenses()[0].title, "Coffee");
        assert_eq!(
            app.expenses.category_totals()[&Category::Food],
            Money::from_cents(5525)
        );
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.notification_type, NotificationType::Success);
        assert_eq!(toast.message, "Added \"Coffee\" ($4.50)");
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);

        app.open_dialog(ActiveDialog::AddExpense);
        type_into(&mut app, "", "abc");
        assert!(!app.submit_form());

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(app.expense_form.errors.len(), 2);
        assert_eq!(app.expenses.len(), 4);
    }

    #[test]
    fn test_edit_keeps_id() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);
        let id = app.visible_expenses()[1].id.clone();

        app.select(1);
        app.edit_selected();
        assert_eq!(app.active_dialog, ActiveDialog::EditExpense(id.clone()));
        assert_eq!(app.expense_form.to_form().title, "Gas Station");

        type_into(&mut app, "Fuel", "42");
        assert!(app.submit_form());

        let edited = app.expenses.get(&id).unwrap();
        assert_eq!(edited.title, "Fuel");
        assert_eq!(edited.amount, Money::from_cents(4200));
        assert_eq!(edited.category, Category::Transportation);
        assert_eq!(app.expenses.len(), 4);
    }

    #[test]
    fn test_edit_of_deleted_record_reports_not_found() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);
        let id = app.visible_expenses()[0].id.clone();

        app.open_dialog(ActiveDialog::EditExpense(id.clone()));
        app.expenses.delete(&id).unwrap();
        assert!(app.submit_form());

        assert_eq!(app.expenses.len(), 3);
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.notification_type, NotificationType::Error);
    }

    #[test]
    fn test_swipe_delete_selected() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);

        app.move_to_bottom();
        app.reveal_selected();
        assert!(app.swipe.is_revealed(3));

        app.delete_revealed();
        assert_eq!(app.expenses.len(), 3);
        assert_eq!(app.expenses.total_amount(), Money::from_cents(11625));
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.swipe.revealed(), None);
    }

    #[test]
    fn test_delete_without_reveal_does_nothing() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);
        app.delete_revealed();
        assert_eq!(app.expenses.len(), 4);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_moving_resets_swipe() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);
        app.reveal_selected();
        app.move_down();
        assert_eq!(app.swipe.revealed(), None);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_filter_changes_visible_rows() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);
        app.move_to_bottom();

        app.set_filter(CategoryFilter::Only(Category::Bills));
        assert_eq!(app.selected_index, 0);
        let visible = app.visible_expenses();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Electric Bill");

        app.prev_filter();
        assert_eq!(app.filter, CategoryFilter::Only(Category::Shopping));
        assert!(app.visible_expenses().is_empty());
        assert!(app.selected_expense().is_none());
    }

    #[test]
    fn test_toggle_theme_notifies() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);
        app.toggle_theme();
        assert!(app.theme.is_dark());
        assert_eq!(app.notifications.current().unwrap().message, "Dark mode");
    }

    #[test]
    fn test_ensure_visible() {
        let settings = Settings::default();
        let mut app = App::new(ExpenseStore::seeded(), &settings);
        app.move_to_bottom();
        app.ensure_visible(2);
        assert_eq!(app.scroll_offset, 2);
        app.move_to_top();
        app.ensure_visible(2);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_hit_areas() {
        let areas = HitAreas {
            list: Rect::new(1, 7, 40, 5),
            chips: vec![(CategoryFilter::All, Rect::new(0, 4, 8, 1))],
            delete_button: Some((1, Rect::new(31, 8, 10, 1))),
        };
        assert_eq!(areas.row_at(5, 9, 0), Some(2));
        assert_eq!(areas.row_at(5, 9, 3), Some(5));
        assert_eq!(areas.row_at(5, 20, 0), None);
        assert_eq!(areas.chip_at(3, 4), Some(CategoryFilter::All));
        assert_eq!(areas.delete_button_at(35, 8), Some(1));
        assert_eq!(areas.delete_button_at(35, 9), None);
    }
}
