use std::collections::HashMap;

use serde::Deserialize;

/// typed schema for an Overpass JSON response. node elements only; a
/// response without a top-level "elements" array fails the parse.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<PoiElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoiElement {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl PoiElement {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.tag("name")
    }
}
