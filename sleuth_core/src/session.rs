use crate::{
    Command, GameMap, InteractionEvent, InteractionMode, PlayerState, apply_directional_input,
    create_initial_state, try_interact_with_mode,
};

/// Owns the map and the authoritative player state for one play session.
///
/// Commands are applied one at a time, in the order they are handed in.
#[derive(Debug, Clone)]
pub struct Session {
    map: GameMap,
    state: PlayerState,
    mode: InteractionMode,
}

impl Session {
    pub fn new(map: GameMap, mode: InteractionMode) -> Self {
        let state = create_initial_state(&map);
        Session { map, state, mode }
    }

    /// Applies one command. Returns the interaction it triggered, if any.
    pub fn handle(&mut self, command: Command) -> Option<InteractionEvent> {
        match command {
            Command::Move(direction) => {
                let next = apply_directional_input(&self.map, self.state, direction);
                if next.position == self.state.position {
                    tracing::debug!(
                        x = next.position.x,
                        y = next.position.y,
                        ?direction,
                        "move blocked"
                    );
                }
                self.state = next;
                None
            }
            Command::Interact => {
                let event = try_interact_with_mode(&self.map, &self.state, self.mode);
                match &event {
                    Some(event) => tracing::info!(
                        object_id = event.object_id,
                        x = event.at.x,
                        y = event.at.y,
                        "interaction"
                    ),
                    None => tracing::debug!(state = ?self.state, "nothing to interact with"),
                }
                event
            }
        }
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Layer, LayerTag, Position};

    fn corridor() -> GameMap {
        let clues = Layer::from_rows(
            1,
            "clues",
            [LayerTag::Interactable, LayerTag::NonPassable],
            vec![vec![0, 0, 0, 0], vec![0, 0, 0, 3], vec![0, 0, 0, 0]],
        )
        .unwrap();
        GameMap::new(vec![clues], Vec::new()).unwrap()
    }

    #[test]
    fn starts_from_initial_state() {
        let session = Session::new(corridor(), InteractionMode::default());
        assert_eq!(session.state(), PlayerState::default());
        assert_eq!(session.mode(), InteractionMode::Facing);
        assert_eq!(session.map().width(), 4);
    }

    #[test]
    fn commands_apply_in_order() {
        let mut session = Session::new(corridor(), InteractionMode::Facing);
        assert_eq!(session.handle(Command::Move(Direction::Right)), None);
        assert_eq!(session.handle(Command::Move(Direction::Right)), None);
        // (3, 1) holds the object, so the second step is refused.
        assert_eq!(session.state().position, Position::new(2, 1));
        assert_eq!(
            session.handle(Command::Interact),
            Some(InteractionEvent {
                object_id: 3,
                at: Position::new(3, 1)
            })
        );
        assert_eq!(session.state().facing, Direction::Right);
    }

    #[test]
    fn interact_leaves_state_alone() {
        let mut session = Session::new(corridor(), InteractionMode::Omnidirectional);
        let before = session.state();
        assert_eq!(session.handle(Command::Interact), None);
        assert_eq!(session.state(), before);
    }
}
