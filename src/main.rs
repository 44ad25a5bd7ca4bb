use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use expense_tracker::cli::{
    handle_config_command, handle_expense_command, handle_palette_command, ExpenseCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::{init_tracing, LogTarget};
use expense_tracker::store::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker",
    long_about = "Track expenses by title, amount and category. Filter by category, \
                  see per-category totals and switch between light and dark themes. \
                  Every run starts from the same sample records; nothing is saved."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Print the color palette
    Palette {
        /// Show the dark palette instead of the light one
        #[arg(long)]
        dark: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_tracing(&paths, &settings, target)?;
    debug!(base_dir = %paths.base_dir().display(), "configuration loaded");

    let mut store = ExpenseStore::seeded();

    match command {
        Commands::Tui => expense_tracker::tui::run_tui(store, &settings)?,
        Commands::Expense(cmd) => handle_expense_command(&mut store, &settings, cmd)?,
        Commands::Palette { dark } => handle_palette_command(dark)?,
        Commands::Config { init } => handle_config_command(&paths, &settings, init)?,
    }

    Ok(())
}
