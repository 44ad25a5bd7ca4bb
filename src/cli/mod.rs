//! CLI command handlers
//!
//! Bridges clap argument parsing with the stores and display layer.

pub mod config;
pub mod expense;

pub use config::{handle_config_command, handle_palette_command};
pub use expense::{handle_expense_command, ExpenseCommands};
