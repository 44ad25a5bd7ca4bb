//! Expense Tracker - a single-screen terminal expense tracker
//!
//! Records expenses with a title, amount and category, shows them in a
//! filterable swipe-to-delete list with per-category totals, and switches
//! between a light and a dark palette. State lives for one session; every
//! launch starts from the same four seed records.
//!
//! # Architecture
//!
//! - `models`: money, categories, expenses and palettes
//! - `store`: the expense collection and the theme flag
//! - `filter`: category filter, filtered totals and chip counts
//! - `form`: validation at the input boundary
//! - `config`: paths and user settings
//! - `logging`: `tracing` subscriber setup
//! - `display`: table output for the command line
//! - `cli`: command handlers
//! - `tui`: the interactive screen
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::{Category, Money, NewExpense};
//! use expense_tracker::store::ExpenseStore;
//!
//! let mut store = ExpenseStore::seeded();
//! store.create(NewExpense::new("Coffee", Money::from_cents(450), Category::Food));
//! assert_eq!(store.total_amount().to_string(), "200.75");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod form;
pub mod logging;
pub mod models;
pub mod store;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
