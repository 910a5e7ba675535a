use serde::{Deserialize, Serialize};

use super::StationType;

/// a point transit stop owned by exactly one area. the `id` is the POI
/// provider's stable element id; every population run bulk-replaces the
/// owning area's station set, so stations absent from the latest provider
/// response disappear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub station_type: StationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
