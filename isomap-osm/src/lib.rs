mod osm_error;
mod poi_client;
mod poi_query;
mod poi_response;

pub use osm_error::OsmPoiError;
pub use poi_client::{PoiClient, PoiProviderConfig};
pub use poi_query::{station_query, TagFilter};
pub use poi_response::{OverpassResponse, PoiElement};
