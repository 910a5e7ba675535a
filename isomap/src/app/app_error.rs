use thiserror::Error;

use crate::model::geometry::GeometryError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid isomap configuration: {0}")]
    ConfigurationError(String),
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
    #[error("failure accessing object storage: {source}")]
    Store {
        #[from]
        source: StoreError,
    },
    #[error("failure processing geometry: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },
    #[error("failure calling isochrone provider: {source}")]
    IsochroneProvider {
        #[from]
        source: isomap_mapbox::MapboxError,
    },
    #[error("failure calling POI provider: {source}")]
    PoiProvider {
        #[from]
        source: isomap_osm::OsmPoiError,
    },
}
