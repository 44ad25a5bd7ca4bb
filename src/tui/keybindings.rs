//! Keybinding definitions
//!
//! The help overlay is generated from [`KEYBINDINGS`], so every key the
//! handler routes should have an entry here.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active whenever no dialog is open
    Global,
    /// The expense list
    List,
    /// The add/edit form
    Form,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::List => "Expense List",
            Self::Form => "Expense Form",
        }
    }
}

const fn bind(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('q'), KeyModifiers::NONE, "Quit", KeyContext::Global),
    bind(KeyCode::Char('?'), KeyModifiers::NONE, "Help", KeyContext::Global),
    bind(KeyCode::Char('t'), KeyModifiers::NONE, "Toggle light/dark theme", KeyContext::Global),
    bind(KeyCode::Char('['), KeyModifiers::NONE, "Previous category filter", KeyContext::Global),
    bind(KeyCode::Char(']'), KeyModifiers::NONE, "Next category filter", KeyContext::Global),
    bind(KeyCode::Left, KeyModifiers::SHIFT, "Previous category filter", KeyContext::Global),
    bind(KeyCode::Right, KeyModifiers::SHIFT, "Next category filter", KeyContext::Global),
    // List
    bind(KeyCode::Char('a'), KeyModifiers::NONE, "Add expense", KeyContext::List),
    bind(KeyCode::Char('n'), KeyModifiers::NONE, "Add expense", KeyContext::List),
    bind(KeyCode::Char('e'), KeyModifiers::NONE, "Edit selected expense", KeyContext::List),
    bind(KeyCode::Enter, KeyModifiers::NONE, "Edit selected expense", KeyContext::List),
    bind(KeyCode::Char('j'), KeyModifiers::NONE, "Move down", KeyContext::List),
    bind(KeyCode::Char('k'), KeyModifiers::NONE, "Move up", KeyContext::List),
    bind(KeyCode::Char('g'), KeyModifiers::NONE, "Go to top", KeyContext::List),
    bind(KeyCode::Char('G'), KeyModifiers::SHIFT, "Go to bottom", KeyContext::List),
    bind(KeyCode::Char('h'), KeyModifiers::NONE, "Swipe left (reveal delete)", KeyContext::List),
    bind(KeyCode::Char('l'), KeyModifiers::NONE, "Swipe back", KeyContext::List),
    bind(KeyCode::Char('d'), KeyModifiers::NONE, "Delete revealed expense", KeyContext::List),
    bind(KeyCode::Delete, KeyModifiers::NONE, "Delete revealed expense", KeyContext::List),
    bind(KeyCode::Esc, KeyModifiers::NONE, "Swipe back", KeyContext::List),
    // Form
    bind(KeyCode::Tab, KeyModifiers::NONE, "Next field", KeyContext::Form),
    bind(KeyCode::BackTab, KeyModifiers::SHIFT, "Previous field", KeyContext::Form),
    bind(KeyCode::Left, KeyModifiers::NONE, "Previous category (category field)", KeyContext::Form),
    bind(KeyCode::Right, KeyModifiers::NONE, "Next category (category field)", KeyContext::Form),
    bind(KeyCode::Enter, KeyModifiers::NONE, "Save", KeyContext::Form),
    bind(KeyCode::Esc, KeyModifiers::NONE, "Cancel", KeyContext::Form),
];

/// Get the keybindings of one context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(kb.key, KeyCode::Char(_) | KeyCode::BackTab)
    {
        parts.push("Shift");
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}
