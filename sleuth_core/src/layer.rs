use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ObjectId, Position, TileId, map::Grid, map::GridError};

/// Semantic tag attached to a layer.
///
/// A layer can carry any combination of tags; queries only ever ask whether a
/// tag is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LayerTag {
    Interactable,
    #[serde(rename = "Non-Interactable")]
    NonInteractable,
    Passable,
    #[serde(rename = "Non-Passable")]
    NonPassable,
}

/// One named grid of tile ids plus the tags that give its tiles meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Paint order. Has no effect on queries.
    pub order_in_layer: i32,
    pub name: String,
    tags: BTreeSet<LayerTag>,
    tiles: Grid<TileId>,
}

impl Layer {
    /// Creates a layer from an already-built tile grid.
    pub fn new(
        order_in_layer: i32,
        name: impl Into<String>,
        tags: impl IntoIterator<Item = LayerTag>,
        tiles: Grid<TileId>,
    ) -> Self {
        Layer {
            order_in_layer,
            name: name.into(),
            tags: tags.into_iter().collect(),
            tiles,
        }
    }

    /// Creates a layer from nested rows, failing if the rows are not rectangular.
    pub fn from_rows(
        order_in_layer: i32,
        name: impl Into<String>,
        tags: impl IntoIterator<Item = LayerTag>,
        rows: Vec<Vec<TileId>>,
    ) -> Result<Self, GridError> {
        Ok(Layer::new(order_in_layer, name, tags, Grid::from_rows(rows)?))
    }

    #[inline]
    pub fn has_tag(&self, tag: LayerTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = LayerTag> + '_ {
        self.tags.iter().copied()
    }

    pub fn tiles(&self) -> &Grid<TileId> {
        &self.tiles
    }

    /// `(width, height)` of this layer's grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.tiles.width(), self.tiles.height())
    }

    /// Non-zero tile at `position`, or `None` when the cell is empty or lies
    /// outside this layer.
    pub fn occupant(&self, position: Position) -> Option<TileId> {
        self.tiles.get_at(position).copied().filter(|&tile| tile != 0)
    }

    /// The object id at `position` if this layer is interactable.
    pub fn object_at(&self, position: Position) -> Option<ObjectId> {
        if self.has_tag(LayerTag::Interactable) {
            self.occupant(position)
        } else {
            None
        }
    }

    /// Whether this layer alone stops movement into `position`.
    pub fn blocks(&self, position: Position) -> bool {
        self.has_tag(LayerTag::NonPassable) && self.occupant(position).is_some()
    }
}
