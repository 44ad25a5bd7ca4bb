//! Palette display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Palette;

#[derive(Tabled)]
struct ColorRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Color")]
    hex: String,
}

/// Format every named color of a palette
pub fn format_palette(mode: &str, palette: &Palette) -> String {
    let rows = palette.entries().into_iter().map(|(name, color)| ColorRow {
        name,
        hex: color.hex(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{} palette\n{}\n", mode, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::palette::DARK;

    #[test]
    fn test_format_palette() {
        let output = format_palette("Dark", &DARK);
        assert!(output.starts_with("Dark palette\n"));
        assert!(output.contains("swipeDelete"));
        assert!(output.contains(&DARK.background.hex()));
        assert!(output.contains("Education"));
    }
}
