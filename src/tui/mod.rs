//! Terminal User Interface module
//!
//! A single-screen expense tracker built on ratatui: summary header,
//! category chips, a swipeable expense list, a totals panel and modal
//! add/edit and help dialogs.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
