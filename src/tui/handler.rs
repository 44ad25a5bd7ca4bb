//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;
use super::widgets::swipe::SwipeOutcome;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys on the main screen
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('t') => app.toggle_theme(),

        // Filter chips
        KeyCode::Char('[') => app.prev_filter(),
        KeyCode::Char(']') => app.next_filter(),
        KeyCode::Left if shift => app.prev_filter(),
        KeyCode::Right if shift => app.next_filter(),

        // Add / edit
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),

        // Swipe to delete
        KeyCode::Char('h') | KeyCode::Left => app.reveal_selected(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Esc => app.swipe.reset(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_revealed(),

        _ => {}
    }

    Ok(())
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if app.has_dialog() {
        if matches!(app.active_dialog, ActiveDialog::Help)
            && matches!(mouse.kind, MouseEventKind::Down(_))
        {
            app.close_dialog();
        }
        return Ok(());
    }

    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.hit_areas.delete_button_at(column, row).is_some() {
                app.delete_revealed();
            } else if let Some(filter) = app.hit_areas.chip_at(column, row) {
                app.set_filter(filter);
            } else if let Some(index) = app.hit_areas.row_at(column, row, app.scroll_offset) {
                if index < app.visible_expenses().len() {
                    app.select(index);
                    app.swipe.begin(index, column);
                } else {
                    app.swipe.reset();
                }
            } else {
                app.swipe.reset();
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.swipe.drag_to(column),
        MouseEventKind::Up(MouseButton::Left) if app.swipe.is_dragging() => {
            if let SwipeOutcome::Tap(index) = app.swipe.release() {
                app.select(index);
                app.edit_selected();
            }
        }
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::ScrollUp => app.move_up(),
        _ => {}
    }

    Ok(())
}
