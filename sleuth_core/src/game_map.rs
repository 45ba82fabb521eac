use serde::{Deserialize, Serialize};

use crate::{ObjectId, Position, layer::Layer, map::GridError};

/// Display metadata for an object placed on an interactable layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapObject {
    pub id: ObjectId,
    pub image_url: String,
}

/// Raised when layer data cannot form a consistent map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedMapError {
    #[error("Layer '{layer}' row {row} has {found} tiles, expected {expected}")]
    RaggedRows {
        layer: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(
        "Layer '{layer}' is {}x{}, but the map is {}x{}",
        .found.0, .found.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        layer: String,
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl MalformedMapError {
    pub(crate) fn from_grid(layer: &str, err: GridError) -> Self {
        match err {
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => MalformedMapError::RaggedRows {
                layer: layer.to_string(),
                row,
                expected,
                found,
            },
        }
    }
}

/// The validated, read-only layered map for one session.
///
/// Layers keep their stored order; that order decides tie-breaks between
/// interactable layers. Paint order is a separate concern, see
/// [`GameMap::layers_by_paint_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    width: usize,
    height: usize,
    layers: Vec<Layer>,
    objects: Vec<MapObject>,
}

impl GameMap {
    /// Builds a map, checking that every layer has the dimensions of the first.
    pub fn new(layers: Vec<Layer>, objects: Vec<MapObject>) -> Result<Self, MalformedMapError> {
        let (width, height) = layers.first().map_or((0, 0), Layer::dimensions);

        if let Some(layer) = layers.iter().find(|l| l.dimensions() != (width, height)) {
            return Err(MalformedMapError::DimensionMismatch {
                layer: layer.name.clone(),
                expected: (width, height),
                found: layer.dimensions(),
            });
        }

        tracing::debug!(
            width,
            height,
            layers = layers.len(),
            objects = objects.len(),
            "map loaded"
        );

        Ok(GameMap {
            width,
            height,
            layers,
            objects,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `position` lies on the map. Queries never need this; it is
    /// here for callers that want to clamp movement to the map themselves.
    pub fn in_bounds(&self, position: Position) -> bool {
        usize::try_from(position.x).is_ok_and(|x| x < self.width)
            && usize::try_from(position.y).is_ok_and(|y| y < self.height)
    }

    /// Layers in stored order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer indices sorted by `order_in_layer`, lowest first. Equal orders
    /// keep their stored order.
    pub fn layers_by_paint_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.layers.len()).collect();
        order.sort_by_key(|&i| self.layers[i].order_in_layer);
        order
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    /// Looks up display metadata for an object id.
    pub fn object(&self, id: ObjectId) -> Option<&MapObject> {
        self.objects.iter().find(|object| object.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayerTag;

    fn layer(name: &str, order: i32, rows: Vec<Vec<u32>>) -> Layer {
        Layer::from_rows(order, name, [LayerTag::Passable], rows).unwrap()
    }

    #[test]
    fn rejects_layers_with_different_dimensions() {
        let err = GameMap::new(
            vec![
                layer("floor", 1, vec![vec![0, 0], vec![0, 0]]),
                layer("wall", 2, vec![vec![1, 1, 1], vec![1, 0, 1]]),
            ],
            Vec::new(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            MalformedMapError::DimensionMismatch {
                layer: "wall".to_string(),
                expected: (2, 2),
                found: (3, 2),
            }
        );
    }

    #[test]
    fn rejects_layers_with_different_heights() {
        let err = GameMap::new(
            vec![
                layer("floor", 1, vec![vec![0, 0], vec![0, 0]]),
                layer("rug", 2, vec![vec![0, 0]]),
            ],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, MalformedMapError::DimensionMismatch { .. }));
    }

    #[test]
    fn empty_layer_list_is_a_zero_sized_map() {
        let map = GameMap::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!((map.width(), map.height()), (0, 0));
        assert!(!map.in_bounds(Position::new(0, 0)));
    }

    #[test]
    fn in_bounds_checks_both_axes() {
        let map = GameMap::new(vec![layer("floor", 1, vec![vec![0; 3]; 2])], Vec::new()).unwrap();
        assert!(map.in_bounds(Position::new(2, 1)));
        assert!(!map.in_bounds(Position::new(3, 1)));
        assert!(!map.in_bounds(Position::new(2, 2)));
        assert!(!map.in_bounds(Position::new(-1, 0)));
    }

    #[test]
    fn paint_order_is_stable_and_independent_of_storage() {
        let map = GameMap::new(
            vec![
                layer("top", 5, vec![vec![0]]),
                layer("bottom", 1, vec![vec![0]]),
                layer("middle-a", 3, vec![vec![0]]),
                layer("middle-b", 3, vec![vec![0]]),
            ],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(map.layers_by_paint_order(), vec![1, 2, 3, 0]);
        assert_eq!(map.layers()[0].name, "top");
    }

    #[test]
    fn object_lookup_by_id() {
        let map = GameMap::new(
            Vec::new(),
            vec![MapObject {
                id: 100,
                image_url: "https://example.test/100".to_string(),
            }],
        )
        .unwrap();
        assert_eq!(
            map.object(100).map(|o| o.image_url.as_str()),
            Some("https://example.test/100")
        );
        assert!(map.object(1).is_none());
    }

    #[test]
    fn ragged_grid_error_names_the_layer() {
        let err = MalformedMapError::from_grid(
            "wall",
            GridError::RaggedRow {
                row: 2,
                expected: 7,
                found: 6,
            },
        );
        assert_eq!(err.to_string(), "Layer 'wall' row 2 has 6 tiles, expected 7");
    }
}
