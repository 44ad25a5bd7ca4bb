//! Theme store
//!
//! A single light/dark flag and the palette derived from it. Starts in
//! light mode on every launch.

use tracing::debug;

use crate::models::palette::{DARK, LIGHT};
use crate::models::Palette;

/// Light/dark theme state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeStore {
    dark: bool,
}

impl ThemeStore {
    /// Create a theme store in light mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between light and dark mode
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        debug!(dark = self.dark, "theme toggled");
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// The palette for the current mode
    pub fn palette(&self) -> &'static Palette {
        if self.dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// "Light" or "Dark"
    pub fn mode_name(&self) -> &'static str {
        if self.dark {
            "Dark"
        } else {
            "Light"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_light() {
        let theme = ThemeStore::new();
        assert!(!theme.is_dark());
        assert_eq!(theme.palette(), &LIGHT);
        assert_eq!(theme.mode_name(), "Light");
    }

    #[test]
    fn test_toggle_switches_palette() {
        let mut theme = ThemeStore::new();
        theme.toggle();
        assert!(theme.is_dark());
        assert_eq!(theme.palette(), &DARK);
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut theme = ThemeStore::new();
        let original = *theme.palette();
        theme.toggle();
        theme.toggle();
        assert!(!theme.is_dark());
        assert_eq!(*theme.palette(), original);
    }
}
