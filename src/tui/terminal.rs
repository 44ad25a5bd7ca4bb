//! Terminal setup and teardown
//!
//! Initializes raw mode, the alternate screen and mouse capture, and
//! installs a panic hook that restores the terminal before reporting.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::error::ExpenseError;
use crate::store::ExpenseStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(expenses: ExpenseStore, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!(expenses = expenses.len(), "starting TUI");

    let mut app = App::new(expenses, settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    info!(
        expenses = app.expenses.len(),
        total = %app.expenses.total_amount(),
        "TUI closed"
    );

    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        let event = events
            .next()
            .map_err(|_| ExpenseError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event)?;
    }
    Ok(())
}
