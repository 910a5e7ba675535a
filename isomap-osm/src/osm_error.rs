use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmPoiError {
    #[error("POI provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("structure of POI provider response is invalid: {0}")]
    InvalidResponse(String),
    #[error("POI provider did not respond within {0} seconds")]
    Timeout(u64),
}
