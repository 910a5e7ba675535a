use std::time::Duration;

use crate::{IsochroneProviderConfig, IsochroneResponse, MapboxError};

/// hard request deadline for one isochrone lookup, in seconds.
pub const ISOCHRONE_TIMEOUT_SECONDS: u64 = 30;

/// blocking client for the walking isochrone provider. one outbound request
/// per [`IsochroneClient::fetch`] call, no retries; failed lookups are the
/// caller's to skip or surface.
pub struct IsochroneClient {
    client: reqwest::blocking::Client,
    config: IsochroneProviderConfig,
}

impl IsochroneClient {
    pub fn new(config: IsochroneProviderConfig) -> Result<Self, MapboxError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(ISOCHRONE_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| {
                MapboxError::ProviderUnavailable(format!("failure building HTTP client: {e}"))
            })?;
        Ok(Self { client, config })
    }

    /// fetch the walking isochrone around (lat, lon) for one contour, as a
    /// single GeoJSON polygon feature in (lon, lat) order.
    pub fn fetch(
        &self,
        lat: f64,
        lon: f64,
        contour_minutes: u32,
    ) -> Result<geojson::Feature, MapboxError> {
        let url = self.config.request_url(lat, lon);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("contours_minutes", contour_minutes.to_string()),
                ("polygons", String::from("true")),
                ("access_token", self.config.api_key.clone()),
            ])
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MapboxError::Unauthorized(format!(
                "provider returned {status}"
            )));
        }
        if !status.is_success() {
            return Err(MapboxError::ProviderUnavailable(format!(
                "provider returned {status} for {url}"
            )));
        }

        let parsed: IsochroneResponse = response
            .json()
            .map_err(|e| MapboxError::InvalidResponse(e.to_string()))?;
        parsed.into_single_feature(self.config.coordinate_order)
    }
}

fn classify_transport_error(e: reqwest::Error) -> MapboxError {
    if e.is_timeout() {
        MapboxError::Timeout(ISOCHRONE_TIMEOUT_SECONDS)
    } else {
        MapboxError::ProviderUnavailable(e.to_string())
    }
}
