//! Read-only spatial lookups against a [`GameMap`].
//!
//! Neither query treats off-map positions as special: a layer simply has no
//! occupant outside its own grid, so walking off the map is not blocked here.

use crate::{GameMap, ObjectId, Position};

/// True if any layer tagged `NonPassable` has a non-zero tile at `position`.
pub fn is_blocked(map: &GameMap, position: Position) -> bool {
    map.layers().iter().any(|layer| layer.blocks(position))
}

/// The object id at `position`, taken from the first interactable layer (in
/// stored order) that has an occupant there.
///
/// When several interactable layers overlap, the earliest stored layer wins.
pub fn interactable_at(map: &GameMap, position: Position) -> Option<ObjectId> {
    map.layers()
        .iter()
        .find_map(|layer| layer.object_at(position))
}

impl GameMap {
    /// See [`is_blocked`].
    #[inline]
    pub fn is_blocked(&self, position: Position) -> bool {
        is_blocked(self, position)
    }

    /// See [`interactable_at`].
    #[inline]
    pub fn interactable_at(&self, position: Position) -> Option<ObjectId> {
        interactable_at(self, position)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{Layer, LayerTag};

    fn map_with(layers: Vec<Layer>) -> GameMap {
        GameMap::new(layers, Vec::new()).unwrap()
    }

    fn layer(name: &str, tags: &[LayerTag], rows: Vec<Vec<u32>>) -> Layer {
        Layer::from_rows(0, name, tags.iter().copied(), rows).unwrap()
    }

    #[test]
    fn passable_occupants_do_not_block() {
        let map = map_with(vec![layer(
            "rug",
            &[LayerTag::Passable, LayerTag::NonInteractable],
            vec![vec![5, 5], vec![5, 5]],
        )]);
        assert!(!is_blocked(&map, Position::new(0, 0)));
    }

    #[test]
    fn any_non_passable_layer_blocks() {
        let map = map_with(vec![
            layer("floor", &[LayerTag::Passable], vec![vec![0, 0], vec![0, 0]]),
            layer("wall", &[LayerTag::NonPassable], vec![vec![1, 0], vec![0, 0]]),
            layer("desk", &[LayerTag::NonPassable], vec![vec![0, 0], vec![0, 9]]),
        ]);
        assert!(is_blocked(&map, Position::new(0, 0)));
        assert!(is_blocked(&map, Position::new(1, 1)));
        assert!(!is_blocked(&map, Position::new(1, 0)));
    }

    #[test]
    fn blocked_result_ignores_layer_order() {
        let wall = layer("wall", &[LayerTag::NonPassable], vec![vec![1, 0]]);
        let floor = layer("floor", &[LayerTag::Passable], vec![vec![0, 0]]);
        let forward = map_with(vec![wall.clone(), floor.clone()]);
        let reversed = map_with(vec![floor, wall]);
        for x in -1..3 {
            let pos = Position::new(x, 0);
            assert_eq!(is_blocked(&forward, pos), is_blocked(&reversed, pos));
        }
    }

    #[test]
    fn earliest_interactable_layer_wins() {
        let map = map_with(vec![
            layer("clues", &[LayerTag::Interactable], vec![vec![0, 42]]),
            layer("props", &[LayerTag::Interactable], vec![vec![7, 8]]),
        ]);
        assert_eq!(interactable_at(&map, Position::new(1, 0)), Some(42));
        assert_eq!(interactable_at(&map, Position::new(0, 0)), Some(7));
    }

    #[test]
    fn non_interactable_layers_are_skipped() {
        let map = map_with(vec![
            layer("wall", &[LayerTag::NonInteractable, LayerTag::NonPassable], vec![vec![1]]),
            layer("clues", &[LayerTag::Interactable], vec![vec![0]]),
        ]);
        assert_eq!(interactable_at(&map, Position::new(0, 0)), None);
    }

    #[test]
    fn out_of_bounds_is_never_blocked_or_interactable() {
        let map = map_with(vec![layer(
            "everything",
            &[LayerTag::NonPassable, LayerTag::Interactable],
            vec![vec![1; 3]; 3],
        )]);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let pos = Position::new(rng.random(), rng.random());
            if map.in_bounds(pos) {
                continue;
            }
            assert!(!map.is_blocked(pos));
            assert_eq!(map.interactable_at(pos), None);
        }

        for pos in [
            Position::new(-1, 0),
            Position::new(3, 0),
            Position::new(0, 3),
            Position::new(i32::MIN, i32::MAX),
        ] {
            assert!(!map.is_blocked(pos));
            assert_eq!(map.interactable_at(pos), None);
        }
    }
}
