use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("no geometries provided for union")]
    NoGeometries,
    #[error("unsupported geometry type '{0}', expected polygon or multipolygon")]
    UnsupportedGeometry(&'static str),
    #[error("failure decoding GeoJSON geometry: {0}")]
    InvalidGeoJson(String),
}
