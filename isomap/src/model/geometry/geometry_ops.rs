use geo::{unary_union, BooleanOps, Geometry, MultiPolygon, Validation};

use super::GeometryError;

/// validity per planar polygon rules: no self-intersections, consistent ring
/// orientation. non-polygonal geometry is never valid in this pipeline.
pub fn is_valid(geometry: &Geometry<f64>) -> bool {
    match geometry {
        Geometry::Polygon(p) => p.is_valid(),
        Geometry::MultiPolygon(mp) => mp.is_valid(),
        _ => false,
    }
}

/// self-union through the boolean ops pipeline, the polygon-cleaning idiom
/// equivalent to a zero-distance buffer: resolves minor self-intersections
/// without materially changing area, and preserves interior rings. idempotent
/// on already-valid input (the result is an equivalent geometry).
pub fn repair(geometry: &Geometry<f64>) -> Result<Geometry<f64>, GeometryError> {
    let parts = as_multi_polygon(geometry)?;
    let cleaned = parts.union(&parts);
    Ok(collapse(cleaned))
}

/// merge N>=1 polygonal geometries into their set union. singleton input is
/// returned unchanged; larger inputs go through a divide-and-conquer union
/// rather than pairwise folding, since area-wide aggregation can see dozens
/// of station polygons at once.
pub fn union(geometries: &[Geometry<f64>]) -> Result<Geometry<f64>, GeometryError> {
    match geometries {
        [] => Err(GeometryError::NoGeometries),
        [single] => Ok(single.clone()),
        many => {
            let parts = many
                .iter()
                .map(as_multi_polygon)
                .collect::<Result<Vec<_>, _>>()?;
            let merged: MultiPolygon<f64> = unary_union(parts.iter());
            Ok(collapse(merged))
        }
    }
}

fn as_multi_polygon(geometry: &Geometry<f64>) -> Result<MultiPolygon<f64>, GeometryError> {
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p.clone()])),
        Geometry::MultiPolygon(mp) => Ok(mp.clone()),
        other => Err(GeometryError::UnsupportedGeometry(type_name(other))),
    }
}

/// single-part multipolygons read back as plain polygons.
fn collapse(multi_polygon: MultiPolygon<f64>) -> Geometry<f64> {
    let mut polygons = multi_polygon.0;
    if polygons.len() == 1 {
        Geometry::Polygon(polygons.remove(0))
    } else {
        Geometry::MultiPolygon(MultiPolygon::new(polygons))
    }
}

fn type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
