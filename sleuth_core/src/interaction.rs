use serde::{Deserialize, Serialize};

use crate::{Direction, GameMap, ObjectId, PlayerState, Position};

/// Emitted when the player interacts with an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub object_id: ObjectId,
    pub at: Position,
}

/// Which neighbouring cells an interact input examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Only the cell the player faces.
    #[default]
    Facing,
    /// The faced cell first, then the other three neighbours in
    /// [`Direction::ALL`] order.
    Omnidirectional,
}

/// Resolves an interact input against the cell the player faces.
///
/// Never changes `state`.
pub fn try_interact(map: &GameMap, state: &PlayerState) -> Option<InteractionEvent> {
    let at = state.facing_position();
    map.interactable_at(at)
        .map(|object_id| InteractionEvent { object_id, at })
}

/// Like [`try_interact`], with the neighbourhood chosen by `mode`.
pub fn try_interact_with_mode(
    map: &GameMap,
    state: &PlayerState,
    mode: InteractionMode,
) -> Option<InteractionEvent> {
    match mode {
        InteractionMode::Facing => try_interact(map, state),
        InteractionMode::Omnidirectional => std::iter::once(state.facing)
            .chain(Direction::ALL.into_iter().filter(|&d| d != state.facing))
            .find_map(|direction| {
                let at = state.position.step(direction);
                map.interactable_at(at)
                    .map(|object_id| InteractionEvent { object_id, at })
            }),
    }
}
