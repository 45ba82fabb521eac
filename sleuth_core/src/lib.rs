use serde::{Deserialize, Serialize};

pub mod game_map;
pub mod input;
pub mod interaction;
pub mod layer;
pub mod map;
pub mod player;
pub mod query;
pub mod scenario;
pub mod scene;
pub mod session;

pub use game_map::{GameMap, MalformedMapError, MapObject};
pub use input::Command;
pub use interaction::{InteractionEvent, InteractionMode, try_interact, try_interact_with_mode};
pub use layer::{Layer, LayerTag};
pub use player::{PlayerState, apply_directional_input, create_initial_state};
pub use query::{interactable_at, is_blocked};
pub use scenario::ScenarioData;
pub use scene::{SceneEntity, compose_scene};
pub use session::Session;

/// Raw per-cell value stored in a layer. `0` means the cell is empty.
pub type TileId = u32;

/// Identifier of an interactable object; the non-zero tile value of an
/// interactable layer.
pub type ObjectId = u32;

/// Represents a 2D grid coordinate.
///
/// Coordinates are signed and unbounded: whether a position lies on the map
/// is decided by the layers, not by the position itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns the neighbouring position one cell away in `direction`.
    ///
    /// Saturates at the `i32` limits instead of overflowing.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// One of the four directions the player can move or face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` with y growing downwards.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps() {
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
    }

    #[test]
    fn step_moves_one_cell() {
        let origin = Position::new(3, 3);
        assert_eq!(origin.step(Direction::Up), Position::new(3, 2));
        assert_eq!(origin.step(Direction::Left), Position::new(2, 3));
    }

    #[test]
    fn step_saturates_at_limits() {
        let corner = Position::new(i32::MAX, i32::MIN);
        assert_eq!(corner.step(Direction::Right), corner);
        assert_eq!(corner.step(Direction::Up), corner);
    }

    #[test]
    fn default_facing_is_down() {
        assert_eq!(Direction::default(), Direction::Down);
    }
}
