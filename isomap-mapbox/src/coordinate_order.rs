use serde::{Deserialize, Serialize};

/// coordinate ordering used by a provider's polygon positions. GeoJSON is
/// (lon, lat); some routing providers hand back (lat, lon) pairs instead,
/// and feeding those through unswapped silently mirrors every polygon.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateOrder {
    #[default]
    LonLat,
    LatLon,
}

impl CoordinateOrder {
    /// normalize a parsed provider geometry to (lon, lat) order. applied
    /// exactly once, at the response parse boundary.
    pub fn normalize(&self, geometry: geojson::Value) -> geojson::Value {
        match self {
            CoordinateOrder::LonLat => geometry,
            CoordinateOrder::LatLon => swap_value(geometry),
        }
    }
}

fn swap_value(value: geojson::Value) -> geojson::Value {
    match value {
        geojson::Value::Polygon(rings) => geojson::Value::Polygon(swap_rings(rings)),
        geojson::Value::MultiPolygon(polygons) => geojson::Value::MultiPolygon(
            polygons.into_iter().map(swap_rings).collect(),
        ),
        other => other,
    }
}

fn swap_rings(rings: Vec<Vec<Vec<f64>>>) -> Vec<Vec<Vec<f64>>> {
    rings
        .into_iter()
        .map(|ring| ring.into_iter().map(swap_position).collect())
        .collect()
}

fn swap_position(mut position: Vec<f64>) -> Vec<f64> {
    if position.len() >= 2 {
        position.swap(0, 1);
    }
    position
}
