//! Theme palettes
//!
//! Two fixed palettes, one per theme mode. Colors are plain RGB triples so
//! the palette reads the same from the CLI and the TUI; the TUI converts them
//! into `ratatui` colors.

use serde::Serialize;
use std::fmt;

use super::category::Category;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation, e.g. `#FF3B30`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.0, c.1, c.2)
    }
}

/// Per-category colors, shared by both palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryColors {
    pub food: Rgb,
    pub transportation: Rgb,
    pub entertainment: Rgb,
    pub shopping: Rgb,
    pub bills: Rgb,
    pub healthcare: Rgb,
    pub education: Rgb,
    pub other: Rgb,
}

impl CategoryColors {
    pub fn get(&self, category: Category) -> Rgb {
        match category {
            Category::Food => self.food,
            Category::Transportation => self.transportation,
            Category::Entertainment => self.entertainment,
            Category::Shopping => self.shopping,
            Category::Bills => self.bills,
            Category::Healthcare => self.healthcare,
            Category::Education => self.education,
            Category::Other => self.other,
        }
    }
}

/// The named colors active for a theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Rgb,
    pub card: Rgb,
    pub text: Rgb,
    pub text_secondary: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub error: Rgb,
    pub border: Rgb,
    pub input_background: Rgb,
    pub swipe_delete: Rgb,
    pub categories: CategoryColors,
}

impl Palette {
    /// Named entries in a stable order, for listing
    pub fn entries(&self) -> Vec<(&'static str, Rgb)> {
        let mut entries = vec![
            ("background", self.background),
            ("card", self.card),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("error", self.error),
            ("border", self.border),
            ("inputBackground", self.input_background),
            ("swipeDelete", self.swipe_delete),
        ];
        entries.extend(
            Category::ALL
                .iter()
                .map(|c| (c.name(), self.categories.get(*c))),
        );
        entries
    }
}

pub const CATEGORY_COLORS: CategoryColors = CategoryColors {
    food: Rgb(0xFF, 0x6B, 0x6B),
    transportation: Rgb(0x4E, 0xCD, 0xC4),
    entertainment: Rgb(0x45, 0xB7, 0xD1),
    shopping: Rgb(0x96, 0xCE, 0xB4),
    bills: Rgb(0xFF, 0xEA, 0xA7),
    healthcare: Rgb(0xDD, 0xA0, 0xDD),
    education: Rgb(0x98, 0xD8, 0xC8),
    other: Rgb(0xF7, 0xDC, 0x6F),
};

pub const LIGHT: Palette = Palette {
    background: Rgb(0xF5, 0xF5, 0xF5),
    card: Rgb(0xFF, 0xFF, 0xFF),
    text: Rgb(0x1C, 0x1C, 0x1E),
    text_secondary: Rgb(0x6E, 0x6E, 0x73),
    primary: Rgb(0x00, 0x7A, 0xFF),
    secondary: Rgb(0x58, 0x56, 0xD6),
    error: Rgb(0xFF, 0x3B, 0x30),
    border: Rgb(0xE0, 0xE0, 0xE0),
    input_background: Rgb(0xF2, 0xF2, 0xF7),
    swipe_delete: Rgb(0xE5, 0x39, 0x35),
    categories: CATEGORY_COLORS,
};

pub const DARK: Palette = Palette {
    background: Rgb(0x12, 0x12, 0x12),
    card: Rgb(0x1E, 0x1E, 0x1E),
    text: Rgb(0xF2, 0xF2, 0xF7),
    text_secondary: Rgb(0xA1, 0xA1, 0xA6),
    primary: Rgb(0x0A, 0x84, 0xFF),
    secondary: Rgb(0x5E, 0x5C, 0xE6),
    error: Rgb(0xFF, 0x45, 0x3A),
    border: Rgb(0x38, 0x38, 0x3A),
    input_background: Rgb(0x2C, 0x2C, 0x2E),
    swipe_delete: Rgb(0xC6, 0x28, 0x28),
    categories: CATEGORY_COLORS,
};
