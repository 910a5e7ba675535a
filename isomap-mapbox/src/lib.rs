mod coordinate_order;
mod isochrone_client;
mod isochrone_response;
mod mapbox_error;
mod provider_config;

pub use coordinate_order::CoordinateOrder;
pub use isochrone_client::IsochroneClient;
pub use isochrone_response::{IsochroneFeature, IsochroneResponse};
pub use mapbox_error::MapboxError;
pub use provider_config::IsochroneProviderConfig;
