use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{poi_query, OsmPoiError, OverpassResponse, PoiElement};

/// hard request deadline for one POI lookup, in seconds.
pub const POI_TIMEOUT_SECONDS: u64 = 10;

const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiProviderConfig {
    pub endpoint: String,
}

impl Default for PoiProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
        }
    }
}

/// blocking Overpass client used to discover transit stations around an area
/// center. one request per call, no retries.
pub struct PoiClient {
    client: reqwest::blocking::Client,
    config: PoiProviderConfig,
}

impl PoiClient {
    pub fn new(config: PoiProviderConfig) -> Result<Self, OsmPoiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(POI_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| {
                OsmPoiError::ProviderUnavailable(format!("failure building HTTP client: {e}"))
            })?;
        Ok(Self { client, config })
    }

    /// query station nodes within `radius_meters` of (lat, lon).
    pub fn query_stations(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
    ) -> Result<Vec<PoiElement>, OsmPoiError> {
        let query = poi_query::station_query(lat, lon, radius_meters, POI_TIMEOUT_SECONDS);
        log::debug!("overpass query: {query}");
        let response = self
            .client
            .post(&self.config.endpoint)
            .form(&[("data", query)])
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OsmPoiError::ProviderUnavailable(format!(
                "provider returned {status}"
            )));
        }

        let parsed: OverpassResponse = response
            .json()
            .map_err(|e| OsmPoiError::InvalidResponse(e.to_string()))?;
        Ok(parsed.elements)
    }
}

fn classify_transport_error(e: reqwest::Error) -> OsmPoiError {
    if e.is_timeout() {
        OsmPoiError::Timeout(POI_TIMEOUT_SECONDS)
    } else {
        OsmPoiError::ProviderUnavailable(e.to_string())
    }
}
