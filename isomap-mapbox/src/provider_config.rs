use serde::{Deserialize, Serialize};

use crate::CoordinateOrder;

const DEFAULT_ENDPOINT: &str = "https://api.mapbox.com/isochrone/v1/mapbox/walking";

/// connection parameters for the walking isochrone provider. constructed once
/// from the application configuration and handed to [`crate::IsochroneClient`];
/// the API key never lives in ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsochroneProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default)]
    pub coordinate_order: CoordinateOrder,
}

impl Default for IsochroneProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            api_key: String::new(),
            coordinate_order: CoordinateOrder::default(),
        }
    }
}

impl IsochroneProviderConfig {
    /// request URL for one (point, contour) lookup. positions in the URL are
    /// (lon, lat) per the provider's path convention.
    pub fn request_url(&self, lat: f64, lon: f64) -> String {
        format!("{}/{},{}", self.endpoint.trim_end_matches('/'), lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_lon_lat_order() {
        let config = IsochroneProviderConfig {
            endpoint: String::from("https://iso.example.com/walking/"),
            api_key: String::from("k"),
            coordinate_order: CoordinateOrder::LonLat,
        };
        assert_eq!(
            config.request_url(41.9, 12.5),
            "https://iso.example.com/walking/12.5,41.9"
        );
    }
}
