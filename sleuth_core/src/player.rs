use serde::{Deserialize, Serialize};

use crate::{Direction, GameMap, Position};

/// Where the player stands and which way they face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    pub facing: Direction,
}

impl PlayerState {
    pub const START_POSITION: Position = Position::new(1, 1);

    /// The cell directly in front of the player.
    pub fn facing_position(&self) -> Position {
        self.position.step(self.facing)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState {
            position: Self::START_POSITION,
            facing: Direction::Down,
        }
    }
}

/// Initial state for a new session on `map`: (1, 1), facing down.
pub fn create_initial_state(_map: &GameMap) -> PlayerState {
    PlayerState::default()
}

/// Turns the player toward `direction` and steps forward unless the target is
/// blocked.
///
/// Facing always changes, even when walking into a wall.
pub fn apply_directional_input(map: &GameMap, state: PlayerState, direction: Direction) -> PlayerState {
    let candidate = state.position.step(direction);
    let position = if map.is_blocked(candidate) {
        state.position
    } else {
        candidate
    };

    PlayerState {
        position,
        facing: direction,
    }
}
