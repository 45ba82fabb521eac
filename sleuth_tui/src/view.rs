//! Turns a composed scene into one glyph per map cell.

use sleuth_core::{Direction, GameMap, LayerTag, ObjectId, SceneEntity, TileId, map::Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Floor,
    /// Non-zero tile on a walkable, non-interactable layer.
    Decor(TileId),
    Wall,
    Object(ObjectId),
    Player(Direction),
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Floor => ".",
            Glyph::Decor(_) => ",",
            Glyph::Wall => "#",
            Glyph::Object(_) => "?",
            Glyph::Player(Direction::Up) => "^",
            Glyph::Player(Direction::Down) => "v",
            Glyph::Player(Direction::Left) => "<",
            Glyph::Player(Direction::Right) => ">",
        }
    }
}

/// Paints `scene` onto a grid the size of `map`. Later entities cover earlier
/// ones; empty tiles never cover anything. A player standing off the map is
/// not drawn.
pub fn glyph_grid(map: &GameMap, scene: &[SceneEntity]) -> Grid<Glyph> {
    let mut cells = vec![Glyph::Floor; map.width() * map.height()];
    let index = |x: i32, y: i32| -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < map.width() && y < map.height()).then(|| y * map.width() + x)
    };

    for entity in scene {
        match *entity {
            SceneEntity::Tile { tile_id: 0, .. } => {}
            SceneEntity::Tile {
                layer,
                position,
                tile_id,
            } => {
                if let Some(i) = index(position.x, position.y) {
                    cells[i] = tile_glyph(map, layer, tile_id);
                }
            }
            SceneEntity::Player { position, facing } => {
                if let Some(i) = index(position.x, position.y) {
                    cells[i] = Glyph::Player(facing);
                }
            }
        }
    }

    let mut cells = cells.into_iter();
    Grid::from_generator(map.width(), map.height(), |_, _| {
        cells.next().unwrap_or(Glyph::Floor)
    })
}

fn tile_glyph(map: &GameMap, layer: usize, tile_id: TileId) -> Glyph {
    let layer = &map.layers()[layer];
    if layer.has_tag(LayerTag::Interactable) {
        Glyph::Object(tile_id)
    } else if layer.has_tag(LayerTag::NonPassable) {
        Glyph::Wall
    } else {
        Glyph::Decor(tile_id)
    }
}
