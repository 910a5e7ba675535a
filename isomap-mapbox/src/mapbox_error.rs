use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapboxError {
    #[error("isochrone provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("structure of isochrone provider response is invalid: {0}")]
    InvalidResponse(String),
    #[error("isochrone provider did not respond within {0} seconds")]
    Timeout(u64),
    #[error("isochrone provider rejected credentials: {0}")]
    Unauthorized(String),
}
