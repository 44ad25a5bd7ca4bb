//! Core data models for the expense tracker
//!
//! Expense records, their categories and amounts, plus the theme palettes.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod palette;

pub use category::{Category, CategoryParseError};
pub use expense::{Expense, ExpenseUpdate, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use palette::{Palette, Rgb};
