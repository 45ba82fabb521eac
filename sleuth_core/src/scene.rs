use crate::{Direction, GameMap, PlayerState, Position, TileId};

/// Something the presentation layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEntity {
    Tile {
        /// Index into [`GameMap::layers`].
        layer: usize,
        position: Position,
        tile_id: TileId,
    },
    Player {
        position: Position,
        facing: Direction,
    },
}

/// Flattens the map and player into draw order: every cell of every layer,
/// lowest `order_in_layer` first, then the player last.
///
/// Empty cells (tile id 0) are included so a renderer can decide how to show
/// them.
pub fn compose_scene(map: &GameMap, state: &PlayerState) -> Vec<SceneEntity> {
    let cells = map.width() * map.height();
    let mut entities = Vec::with_capacity(cells * map.layers().len() + 1);

    for layer_index in map.layers_by_paint_order() {
        let layer = &map.layers()[layer_index];
        entities.extend(
            layer
                .tiles()
                .enumerate()
                .map(|(position, &tile_id)| SceneEntity::Tile {
                    layer: layer_index,
                    position,
                    tile_id,
                }),
        );
    }

    entities.push(SceneEntity::Player {
        position: state.position,
        facing: state.facing,
    });
    entities
}
