//! Configuration and palette CLI commands

use crate::config::{ExpensePaths, Settings};
use crate::display::format_palette;
use crate::error::ExpenseResult;
use crate::store::ThemeStore;

/// Print paths and settings, optionally writing the default settings file
pub fn handle_config_command(paths: &ExpensePaths, settings: &Settings, init: bool) -> ExpenseResult<()> {
    if init {
        settings.save(paths)?;
        println!("Wrote settings to {}", paths.settings_file().display());
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    println!("  Tick rate:         {} ms", settings.tick_rate_ms);
    println!("  Notifications:     {} s", settings.notification_secs);
    println!("  Log filter:        {}", settings.log_filter);

    Ok(())
}

/// Print the light palette, or the dark one
pub fn handle_palette_command(dark: bool) -> ExpenseResult<()> {
    let mut theme = ThemeStore::new();
    if dark {
        theme.toggle();
    }
    print!("{}", format_palette(theme.mode_name(), theme.palette()));
    Ok(())
}
