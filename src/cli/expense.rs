//! Expense CLI commands
//!
//! Every invocation starts from the launch seed records; nothing written here
//! outlives the process.

use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_category_totals, format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::CategoryFilter;
use crate::form::ExpenseForm;
use crate::models::Category;
use crate::store::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses, most recent first
    List {
        /// Only show one category ("all" shows everything)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Show per-category and overall totals
    Totals,
    /// Validate and add an expense to the session (not saved)
    Add {
        /// What the money was spent on
        title: String,
        /// Amount spent, e.g. "4.50"
        amount: String,
        /// Category name
        #[arg(short, long, default_value = "Food")]
        category: Category,
    },
}

/// Handle an expense command against the session store
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::List { category } => {
            let expenses = category.apply(store.all());
            print!("{}", format_expense_list(&expenses, category, settings));
        }
        ExpenseCommands::Totals => {
            let totals: Vec<_> = store.category_totals().into_iter().collect();
            print!(
                "{}",
                format_category_totals(&totals, store.total_amount(), settings)
            );
        }
        ExpenseCommands::Add {
            title,
            amount,
            category,
        } => {
            let form = ExpenseForm::new(title, amount, category);
            let input = form.to_new_expense().map_err(|errors| {
                for (field, message) in errors.iter() {
                    eprintln!("  {}: {}", field, message);
                }
                ExpenseError::Validation(errors.to_string())
            })?;

            let expense = store.create(input);
            info!(id = %expense.id, "expense added from command line");

            println!("Added expense:");
            print!("{}", format_expense_details(&expense, settings));
            println!();
            println!(
                "Session total: {} across {} expenses (not saved)",
                store.total_amount().format_with_symbol(&settings.currency_symbol),
                store.len()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_add_valid_grows_store() {
        let mut store = ExpenseStore::seeded();
        handle_expense_command(
            &mut store,
            &Settings::default(),
            ExpenseCommands::Add {
                title: "Coffee".into(),
                amount: "4.5".into(),
                category: Category::Food,
            },
        )
        .unwrap();

        assert_eq!(store.len(), 5);
        assert_eq!(store.total_amount(), Money::from_cents(20075));
    }

    #[test]
    fn test_add_invalid_is_rejected_before_store() {
        let mut store = ExpenseStore::seeded();
        let err = handle_expense_command(
            &mut store,
            &Settings::default(),
            ExpenseCommands::Add {
                title: " ".into(),
                amount: "-1".into(),
                category: Category::Other,
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.len(), 4);
    }
}
