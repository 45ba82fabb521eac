//! Records matching the scenario JSON handed to the client.
//!
//! The data is treated as a pre-validated asset: converting it into a
//! [`GameMap`] only checks that the tile grids are rectangular and agree on
//! their size.

use serde::{Deserialize, Serialize};

use crate::{GameMap, Layer, LayerTag, MalformedMapError, MapObject, TileId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioData {
    pub created_date: String,
    pub scenario_id: u64,
    pub scenario_name: String,
    pub map: MapData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    pub layers: Vec<LayerData>,
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerData {
    pub order_in_layer: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub tags: Vec<LayerTag>,
    pub tile_map: Vec<Vec<TileId>>,
}

impl ScenarioData {
    pub fn into_game_map(self) -> Result<GameMap, MalformedMapError> {
        GameMap::try_from(self.map)
    }
}

impl TryFrom<LayerData> for Layer {
    type Error = MalformedMapError;

    fn try_from(data: LayerData) -> Result<Self, Self::Error> {
        let LayerData {
            order_in_layer,
            name,
            tags,
            tile_map,
        } = data;
        Layer::from_rows(order_in_layer, name.as_str(), tags, tile_map)
            .map_err(|err| MalformedMapError::from_grid(&name, err))
    }
}

impl TryFrom<MapData> for GameMap {
    type Error = MalformedMapError;

    fn try_from(data: MapData) -> Result<Self, Self::Error> {
        let layers = data
            .layers
            .into_iter()
            .map(Layer::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        GameMap::new(layers, data.objects)
    }
}
