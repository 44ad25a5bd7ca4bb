//! Display formatting for CLI output

pub mod expense;
pub mod palette;

pub use expense::{format_category_totals, format_expense_details, format_expense_list};
pub use palette::format_palette;
