//! Expense display formatting
//!
//! Table rendering for the command line, built on `tabled`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::filter::CategoryFilter;
use crate::models::{Category, Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format a filtered list of expenses with its total
pub fn format_expense_list(
    expenses: &[&Expense],
    filter: CategoryFilter,
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return format!("No expenses in {}.\n", filter);
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.short().to_string(),
        date: e.created_at.format(&settings.date_format).to_string(),
        title: e.title.clone(),
        category: e.category.to_string(),
        amount: e.amount.format_with_symbol(&settings.currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} ({} {}): {}\n",
        table,
        filter,
        expenses.len(),
        if expenses.len() == 1 { "expense" } else { "expenses" },
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format per-category totals followed by the overall total
pub fn format_category_totals(
    totals: &[(Category, Money)],
    overall: Money,
    settings: &Settings,
) -> String {
    let symbol = &settings.currency_symbol;
    let rows = totals.iter().map(|(category, total)| TotalRow {
        category: category.to_string(),
        total: total.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    format!("{}\nTotal: {}\n", table, overall.format_with_symbol(symbol))
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Title:    {}\n", expense.title));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Created:  {}\n", expense.created_at_iso()));
    output
}
