use serde::{Deserialize, Serialize};

use super::AppError;
use crate::store::ObjectStoreSource;
use isomap_mapbox::IsochroneProviderConfig;
use isomap_osm::PoiProviderConfig;

/// defines the external collaborators for a pipeline run. constructed once in
/// the binary and passed into each component constructor; no component reads
/// ambient process state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfiguration {
    #[serde(default)]
    pub object_store: ObjectStoreSource,
    #[serde(default)]
    pub isochrone_provider: IsochroneProviderConfig,
    #[serde(default)]
    pub poi_provider: PoiProviderConfig,
}

impl TryFrom<&String> for AppConfiguration {
    type Error = AppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(AppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
