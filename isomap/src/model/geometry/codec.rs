//! conversion between internal [`geo::Geometry`] values and the GeoJSON
//! feature collections persisted to object storage. internal coordinates are
//! always (lon, lat); provider-side order fixes happen in the provider
//! crates, never here.

use geo::Geometry;
use geojson::{Feature, FeatureCollection, JsonObject};

use super::GeometryError;

/// wrap a geometry into a GeoJSON feature with the given properties.
pub fn to_feature(geometry: &Geometry<f64>, properties: Option<JsonObject>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(geometry))),
        id: None,
        properties,
        foreign_members: None,
    }
}

/// wrap a single feature into the one-feature collection shape every
/// isochrone blob uses.
pub fn singleton_collection(feature: Feature) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

/// extract the polygonal geometry of a feature.
pub fn feature_geometry(feature: &Feature) -> Result<Geometry<f64>, GeometryError> {
    let geojson_geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| GeometryError::InvalidGeoJson(String::from("feature has no geometry")))?;
    let geometry = Geometry::<f64>::try_from(geojson_geometry.value.clone())
        .map_err(|e| GeometryError::InvalidGeoJson(e.to_string()))?;
    match geometry {
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Ok(geometry),
        _ => Err(GeometryError::InvalidGeoJson(String::from(
            "feature geometry is not polygonal",
        ))),
    }
}

/// extract the geometry of a stored single-feature collection.
pub fn collection_geometry(collection: &FeatureCollection) -> Result<Geometry<f64>, GeometryError> {
    let feature = collection.features.first().ok_or_else(|| {
        GeometryError::InvalidGeoJson(String::from("feature collection is empty"))
    })?;
    feature_geometry(feature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn sample() -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: 12.49, y: 41.89),
            (x: 12.51, y: 41.89),
            (x: 12.51, y: 41.91),
            (x: 12.49, y: 41.91),
            (x: 12.49, y: 41.89),
        ])
    }

    #[test]
    fn test_round_trip_geometry_equal() {
        let original = sample();
        let collection = singleton_collection(to_feature(&original, None));
        let serialized = serde_json::to_string(&collection).unwrap();
        let parsed: FeatureCollection = serde_json::from_str(&serialized).unwrap();
        let restored = collection_geometry(&parsed).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_empty_collection_rejected() {
        let collection = FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        assert!(matches!(
            collection_geometry(&collection),
            Err(GeometryError::InvalidGeoJson(_))
        ));
    }

    #[test]
    fn test_non_polygonal_feature_rejected() {
        let feature = Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::Point(vec![
                12.5, 41.9,
            ]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert!(matches!(
            feature_geometry(&feature),
            Err(GeometryError::InvalidGeoJson(_))
        ));
    }
}
