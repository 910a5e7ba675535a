//! the union engine: merges per-station reachability polygons into one
//! aggregate feature and attaches its presentation metadata. stateless; each
//! call receives a geometry list and returns one styled collection.

use geo::Geometry;
use geojson::{FeatureCollection, JsonObject};
use serde_json::json;

use crate::model::geometry::{codec, geometry_ops, GeometryError};
use crate::model::style::FeatureStyle;
use crate::model::{AggregateScope, DurationBin};

/// merge N>=1 geometries into a single styled aggregate feature collection.
///
/// an empty input signals [`GeometryError::NoGeometries`]; the caller decides
/// whether that is fatal or a skip. an invalid union result goes through a
/// self-union repair; if it is still invalid afterwards the aggregate is
/// published anyway with a warning. repair is best effort, not a gate.
pub fn aggregate(
    geometries: &[Geometry<f64>],
    scope: &AggregateScope,
    duration: DurationBin,
) -> Result<FeatureCollection, GeometryError> {
    let merged = geometry_ops::union(geometries)?;
    let merged = if geometry_ops::is_valid(&merged) {
        merged
    } else {
        let repaired = geometry_ops::repair(&merged)?;
        if !geometry_ops::is_valid(&repaired) {
            log::warn!(
                "{scope} {duration} union result still invalid after repair, publishing as-is"
            );
        }
        repaired
    };

    let mut properties = JsonObject::new();
    FeatureStyle::aggregate(scope).write_properties(&mut properties);
    properties.insert(String::from("contour"), json!(duration.minutes()));
    properties.insert(String::from("metric"), json!("time"));
    properties.insert(String::from("type"), json!(scope.kind_label()));
    if let AggregateScope::StationType(station_type) = scope {
        if let Some(slug) = station_type.slug() {
            properties.insert(String::from("railway-type"), json!(slug));
        }
    }

    Ok(codec::singleton_collection(codec::to_feature(
        &merged,
        Some(properties),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StationType;
    use geo::{polygon, Area};

    fn square(x0: f64, y0: f64, size: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ])
    }

    #[test]
    fn test_empty_input_signals_no_geometries() {
        let result = aggregate(&[], &AggregateScope::AreaWide, DurationBin::Min10);
        assert!(matches!(result, Err(GeometryError::NoGeometries)));
    }

    #[test]
    fn test_area_wide_feature_shape() {
        let inputs = [square(0.0, 0.0, 1.0), square(0.5, 0.5, 1.0)];
        let collection =
            aggregate(&inputs, &AggregateScope::AreaWide, DurationBin::Min10).unwrap();
        assert_eq!(collection.features.len(), 1);
        let properties = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties.get("fill").unwrap(), "#3b82f6");
        assert_eq!(
            properties.get("fill-opacity").and_then(|v| v.as_f64()),
            Some(0.15)
        );
        assert_eq!(
            properties.get("stroke-width").and_then(|v| v.as_f64()),
            Some(2.0)
        );
        assert_eq!(properties.get("contour").and_then(|v| v.as_u64()), Some(10));
        assert_eq!(properties.get("metric").unwrap(), "time");
        assert_eq!(properties.get("type").unwrap(), "area-wide");
        assert!(!properties.contains_key("railway-type"));
    }

    #[test]
    fn test_station_type_feature_tagged() {
        let inputs = [square(0.0, 0.0, 1.0)];
        let scope = AggregateScope::StationType(StationType::TramStop);
        let collection = aggregate(&inputs, &scope, DurationBin::Min20).unwrap();
        let properties = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties.get("fill").unwrap(), "#eab308");
        assert_eq!(
            properties.get("fill-opacity").and_then(|v| v.as_f64()),
            Some(0.2)
        );
        assert_eq!(properties.get("type").unwrap(), "station-type");
        assert_eq!(properties.get("railway-type").unwrap(), "tram_stop");
    }

    #[test]
    fn test_invalid_union_result_repaired_before_publish() {
        // a lone bowtie passes through union unchanged, so the engine must
        // repair it before attaching styling and publishing
        let bowtie = Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ]);
        assert!(!geometry_ops::is_valid(&bowtie));
        let collection =
            aggregate(&[bowtie], &AggregateScope::AreaWide, DurationBin::Min5).unwrap();
        assert_eq!(collection.features.len(), 1);
        let geometry = codec::collection_geometry(&collection).unwrap();
        assert!(geometry_ops::is_valid(&geometry));
    }

    #[test]
    fn test_union_geometry_covers_largest_input() {
        let inputs = [
            square(0.0, 0.0, 1.0),
            square(0.25, 0.25, 2.0),
            square(1.0, 1.0, 1.0),
        ];
        let largest = 4.0;
        let collection =
            aggregate(&inputs, &AggregateScope::AreaWide, DurationBin::Min30).unwrap();
        let geometry = codec::collection_geometry(&collection).unwrap();
        let area = match &geometry {
            Geometry::Polygon(p) => p.unsigned_area(),
            Geometry::MultiPolygon(mp) => mp.unsigned_area(),
            other => panic!("unexpected geometry {other:?}"),
        };
        assert!(area >= largest);
    }
}
