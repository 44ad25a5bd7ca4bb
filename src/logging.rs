//! Tracing setup
//!
//! The CLI logs to stderr. The TUI owns the terminal, so it logs to a file
//! in the config directory instead. `EXPENSES_LOG` overrides the filter from
//! the settings.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "EXPENSES_LOG";

static INIT_TRACING: Once = Once::new();

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("expense_tracker=info"))
}

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(paths: &ExpensePaths, settings: &Settings, target: LogTarget) -> ExpenseResult<()> {
    let mut result = Ok(());

    INIT_TRACING.call_once(|| {
        let filter = build_filter(settings);
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        result = match target {
            LogTarget::Stderr => {
                builder.with_writer(std::io::stderr).init();
                Ok(())
            }
            LogTarget::File => paths.ensure_directories().and_then(|_| {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(paths.log_file())?;
                builder.with_ansi(false).with_writer(Mutex::new(file)).init();
                Ok(())
            }),
        };

        tracing::debug!(?target, "tracing initialized");
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_falls_back_on_bad_directive() {
        let settings = Settings {
            log_filter: "[[[not a filter".into(),
            ..Settings::default()
        };
        // Must not panic on an unparsable directive
        let _ = build_filter(&settings);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        init_tracing(&paths, &settings, LogTarget::Stderr).unwrap();
        init_tracing(&paths, &settings, LogTarget::File).unwrap();
    }
}
