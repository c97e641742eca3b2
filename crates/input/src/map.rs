//! Key mapping from terminal events to logical keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event to the logical key it drives.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if is_ctrl_c(key) {
        return Some(Key::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Quit),
        _ => None,
    }
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    map_key_event(key) == Some(Key::Quit)
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
