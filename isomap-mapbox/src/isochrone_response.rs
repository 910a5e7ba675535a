use serde::Deserialize;

use crate::{CoordinateOrder, MapboxError};

/// typed schema for the provider response. deserialization fails when the
/// top-level "features" field is absent, which the client reports as
/// [`MapboxError::InvalidResponse`] regardless of the HTTP status.
#[derive(Debug, Deserialize)]
pub struct IsochroneResponse {
    pub features: Vec<IsochroneFeature>,
}

#[derive(Debug, Deserialize)]
pub struct IsochroneFeature {
    pub geometry: geojson::Geometry,
    #[serde(default)]
    pub properties: Option<geojson::JsonObject>,
}

impl IsochroneResponse {
    /// unwrap the single polygon feature expected per contour request,
    /// normalizing coordinate order at this boundary.
    pub fn into_single_feature(
        self,
        order: CoordinateOrder,
    ) -> Result<geojson::Feature, MapboxError> {
        let count = self.features.len();
        let feature = self
            .features
            .into_iter()
            .next()
            .ok_or_else(|| MapboxError::InvalidResponse(String::from("empty features array")))?;
        if count > 1 {
            log::warn!("isochrone response contained {count} features, using the first");
        }
        match feature.geometry.value {
            geojson::Value::Polygon(_) | geojson::Value::MultiPolygon(_) => {}
            ref other => {
                return Err(MapboxError::InvalidResponse(format!(
                    "expected polygon feature, found {other:?}"
                )))
            }
        }
        let value = order.normalize(feature.geometry.value);
        Ok(geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(value)),
            id: None,
            properties: feature.properties,
            foreign_members: None,
        })
    }
}
