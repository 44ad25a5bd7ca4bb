//! In-memory state containers
//!
//! `ExpenseStore` owns the expense records and `ThemeStore` owns the
//! light/dark flag. Neither touches the filesystem.

pub mod expense;
pub mod seed;
pub mod theme;

pub use expense::ExpenseStore;
pub use seed::seed_expenses;
pub use theme::ThemeStore;
