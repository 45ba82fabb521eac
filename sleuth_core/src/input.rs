use serde::{Deserialize, Serialize};

use crate::Direction;

/// A decoded player input, independent of any keyboard backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Interact,
}

impl Command {
    /// Maps a letter key to its command, ignoring case.
    ///
    /// `w`/`a`/`s`/`d` move, `e` and space interact. Anything else is `None`.
    pub fn from_char(ch: char) -> Option<Command> {
        match ch.to_ascii_lowercase() {
            'w' => Some(Command::Move(Direction::Up)),
            's' => Some(Command::Move(Direction::Down)),
            'a' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            'e' | ' ' => Some(Command::Interact),
            _ => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}
