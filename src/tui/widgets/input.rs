//! Text input widget
//!
//! A single-line text field with a character-indexed cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Palette;

/// Editable text content plus cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn value(&self) -> &str {
        &self.content
    }
}

/// Renders a [`TextInput`] as `label: value` with the active palette
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    label: &'a str,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, label: &'a str, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            label,
            focused,
            palette,
        }
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default()
                .fg(self.palette.primary.into())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text_secondary.into())
        };
        let value_style = Style::default()
            .fg(self.palette.text.into())
            .bg(self.palette.input_background.into());

        let mut spans = vec![Span::styled(format!("{:>10}: ", self.label), label_style)];

        if self.input.value().is_empty() && !self.focused {
            spans.push(Span::styled(
                self.input.placeholder.clone(),
                Style::default().fg(self.palette.text_secondary.into()),
            ));
        } else if self.focused {
            let chars: Vec<char> = self.input.value().chars().collect();
            let cursor = self.input.cursor().min(chars.len());
            let before: String = chars[..cursor].iter().collect();
            let under = chars.get(cursor).copied().unwrap_or(' ');
            let after: String = chars.iter().skip(cursor + 1).collect();

            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(
                under.to_string(),
                Style::default()
                    .fg(self.palette.background.into())
                    .bg(self.palette.primary.into()),
            ));
            spans.push(Span::styled(after, value_style));
        } else {
            spans.push(Span::styled(self.input.value().to_string(), value_style));
        }

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Cofee".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.insert('f');
        assert_eq!(input.value(), "Coffee");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Coffe");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("Café");
        assert_eq!(input.cursor(), 4);
        input.backspace();
        assert_eq!(input.value(), "Caf");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "af");
        input.insert('é');
        assert_eq!(input.value(), "éaf");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }
}
