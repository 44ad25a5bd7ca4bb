//! Expense add/edit dialog
//!
//! Modal form with title, amount and category fields. Validation runs on
//! submit; failures are shown under the offending field and keep the dialog
//! open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::{ExpenseForm, FieldErrors, FormField};
use crate::models::{Category, Expense};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::{TextInput, TextInputWidget};

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Title,
    Amount,
    Category,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Title,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Amount => Self::Title,
            Self::Category => Self::Amount,
        }
    }

    fn validated(self) -> Option<FormField> {
        match self {
            Self::Title => Some(FormField::Title),
            Self::Amount => Some(FormField::Amount),
            Self::Category => None,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    pub category: Category,
    /// Messages from the last failed submit
    pub errors: FieldErrors,
}

impl ExpenseFormState {
    /// Empty form, category defaulting to Food
    pub fn new() -> Self {
        Self {
            title_input: TextInput::new().placeholder("What was it for?"),
            amount_input: TextInput::new().placeholder("0.00"),
            ..Self::default()
        }
    }

    /// Form pre-populated from an existing record
    pub fn from_expense(expense: &Expense) -> Self {
        let form = ExpenseForm::from_expense(expense);
        let mut state = Self::new();
        state.title_input = state.title_input.content(form.title);
        state.amount_input = state.amount_input.content(form.amount);
        state.category = form.category;
        state
    }

    /// Current raw values
    pub fn to_form(&self) -> ExpenseForm {
        ExpenseForm::new(
            self.title_input.value(),
            self.amount_input.value(),
            self.category,
        )
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input under focus; the category field has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Title => Some(&mut self.title_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
        }
    }

    /// Apply an edit to the focused input and drop its stale error
    fn edit(&mut self, f: impl FnOnce(&mut TextInput)) {
        if let Some(field) = self.focused_field.validated() {
            self.errors.clear(field);
        }
        if let Some(input) = self.focused_input() {
            f(input);
        }
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let area = centered_rect_fixed(56, 13, frame.area());

    frame.render_widget(Clear, area);

    let title = match &app.active_dialog {
        ActiveDialog::EditExpense(_) => " Edit Expense ",
        _ => " Add Expense ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(palette.primary.into())
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border.into()))
        .style(Style::default().bg(palette.card.into()));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Title error
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Amount error
            Constraint::Length(1), // Category
            Constraint::Length(1), // Category swatch
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;

    frame.render_widget(
        TextInputWidget::new(
            &form.title_input,
            "Title",
            form.focused_field == ExpenseField::Title,
            palette,
        ),
        chunks[0],
    );
    render_error(frame, chunks[1], form.errors.get(FormField::Title), app);

    frame.render_widget(
        TextInputWidget::new(
            &form.amount_input,
            "Amount",
            form.focused_field == ExpenseField::Amount,
            palette,
        ),
        chunks[2],
    );
    render_error(frame, chunks[3], form.errors.get(FormField::Amount), app);

    let category_focused = form.focused_field == ExpenseField::Category;
    let label_style = if category_focused {
        Style::default()
            .fg(palette.primary.into())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary.into())
    };
    let category_line = Line::from(vec![
        Span::styled(format!("{:>10}: ", "Category"), label_style),
        Span::styled(
            if category_focused { "◀ " } else { "  " },
            Style::default().fg(palette.text_secondary.into()),
        ),
        Span::styled(
            form.category.name(),
            Style::default()
                .fg(palette.categories.get(form.category).into())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if category_focused { " ▶" } else { "" },
            Style::default().fg(palette.text_secondary.into()),
        ),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[4]);

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(palette.secondary.into())),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(palette.secondary.into())),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(palette.primary.into())),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(palette.error.into())),
        Span::raw(" Cancel"),
    ])
    .style(Style::default().fg(palette.text.into()));
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn render_error(frame: &mut Frame, area: Rect, message: Option<&str>, app: &App) {
    if let Some(message) = message {
        let line = Line::from(vec![
            Span::raw(" ".repeat(12)),
            Span::styled(
                message.to_string(),
                Style::default().fg(app.theme.palette().error.into()),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.category = form.category.prev();
        }
        KeyCode::Right if form.focused_field == ExpenseField::Category => {
            form.category = form.category.next();
        }
        KeyCode::Left => form.edit(TextInput::move_left),
        KeyCode::Right => form.edit(TextInput::move_right),
        KeyCode::Home => form.edit(TextInput::move_start),
        KeyCode::End => form.edit(TextInput::move_end),
        KeyCode::Backspace => form.edit(TextInput::backspace),
        KeyCode::Delete => form.edit(TextInput::delete),
        KeyCode::Char(c) if form.focused_field != ExpenseField::Category => {
            form.edit(|input| input.insert(c));
        }
        _ => return false,
    }

    true
}
