use std::fmt::{self, Display};

use itertools::Itertools;

/// a single tag-equality fragment of an Overpass QL query. see
/// <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide#Tag_request_clauses_(or_%22tag_filters%22)>
#[derive(Debug, Clone)]
pub struct TagFilter {
    tag: &'static str,
    value: &'static str,
}

impl TagFilter {
    pub const fn new(tag: &'static str, value: &'static str) -> Self {
        Self { tag, value }
    }
}

impl Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[\"{}\"=\"{}\"]", self.tag, self.value)
    }
}

/// tags identifying the transit stop nodes this pipeline tracks.
const STATION_FILTERS: [TagFilter; 3] = [
    TagFilter::new("railway", "station"),
    TagFilter::new("railway", "tram_stop"),
    TagFilter::new("trolleybus", "yes"),
];

/// build the Overpass QL query collecting station nodes within
/// `radius_meters` of a center point.
pub fn station_query(lat: f64, lon: f64, radius_meters: f64, timeout_seconds: u64) -> String {
    let clauses = STATION_FILTERS
        .iter()
        .map(|filter| format!("node{filter}(around:{radius_meters},{lat},{lon});"))
        .join("");
    format!("[out:json][timeout:{timeout_seconds}];({clauses});out body;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_filter_display() {
        let filter = TagFilter::new("railway", "tram_stop");
        assert_eq!(filter.to_string(), "[\"railway\"=\"tram_stop\"]");
    }

    #[test]
    fn test_station_query_contains_all_filters() {
        let query = station_query(41.9, 12.5, 5000.0, 10);
        assert!(query.starts_with("[out:json][timeout:10];"));
        assert!(query.contains("node[\"railway\"=\"station\"](around:5000,41.9,12.5);"));
        assert!(query.contains("node[\"railway\"=\"tram_stop\"](around:5000,41.9,12.5);"));
        assert!(query.contains("node[\"trolleybus\"=\"yes\"](around:5000,41.9,12.5);"));
        assert!(query.ends_with(");out body;"));
    }
}
