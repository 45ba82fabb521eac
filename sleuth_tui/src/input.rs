//! Keyboard handling for the terminal client.
//!
//! Owns the key-to-command mapping so the core only ever sees
//! [`Command`] values.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use sleuth_core::{Command, Direction};

/// High-level outcome of a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Command(Command),
    None,
}

/// Converts a raw key event into a [`KeyAction`]. Releases and repeats are
/// ignored so each physical press drives exactly one transition.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Up => Direction::Up.into(),
        KeyCode::Down => Direction::Down.into(),
        KeyCode::Left => Direction::Left.into(),
        KeyCode::Right => Direction::Right.into(),
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => KeyAction::Quit,
        KeyCode::Char(ch) => Command::from_char(ch).map_or(KeyAction::None, KeyAction::Command),
        _ => KeyAction::None,
    }
}

impl From<Direction> for KeyAction {
    fn from(direction: Direction) -> Self {
        KeyAction::Command(direction.into())
    }
}
