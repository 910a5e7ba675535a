use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// composite (country, area id) key identifying a geographic region's data
/// partition. normalized to lowercase on construction so every storage path
/// derived from it is case-stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct AreaScope {
    country: String,
    area_id: String,
}

impl AreaScope {
    pub fn new(country: &str, area_id: &str) -> Self {
        Self {
            country: country.trim().to_lowercase(),
            area_id: area_id.trim().to_lowercase(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn area_id(&self) -> &str {
        &self.area_id
    }
}

impl Display for AreaScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.country, self.area_id)
    }
}

impl From<AreaScope> for String {
    fn from(value: AreaScope) -> Self {
        value.to_string()
    }
}

impl FromStr for AreaScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((country, area_id)) if !country.is_empty() && !area_id.is_empty() => {
                Ok(AreaScope::new(country, area_id))
            }
            _ => Err(format!(
                "invalid area scope '{s}', expected '<country>-<area-id>'"
            )),
        }
    }
}

impl TryFrom<String> for AreaScope {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AreaScope::from_str(&value)
    }
}

/// a bounded geographic region. the record is replaced whole on update;
/// deletion cascades manually through stations and isochrone blobs first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub scope: AreaScope,
    pub name: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub diameter_meters: f64,
}

impl Area {
    /// search radius for POI discovery around the area center.
    pub fn radius_meters(&self) -> f64 {
        self.diameter_meters / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_normalized_lowercase() {
        let scope = AreaScope::new(" IT", "Roma ");
        assert_eq!(scope.country(), "it");
        assert_eq!(scope.area_id(), "roma");
        assert_eq!(scope.to_string(), "it-roma");
    }

    #[test]
    fn test_scope_parse_round_trip() {
        let scope: AreaScope = "ua-lviv".parse().unwrap();
        assert_eq!(scope, AreaScope::new("ua", "lviv"));
        assert!("lviv".parse::<AreaScope>().is_err());
    }

    #[test]
    fn test_scope_parse_keeps_dashes_in_area_id() {
        let scope: AreaScope = "it-reggio-emilia".parse().unwrap();
        assert_eq!(scope.country(), "it");
        assert_eq!(scope.area_id(), "reggio-emilia");
    }

    #[test]
    fn test_area_serde_round_trip() {
        let area = Area {
            scope: AreaScope::new("it", "roma"),
            name: String::from("Roma"),
            center_lat: 41.9028,
            center_lon: 12.4964,
            diameter_meters: 20_000.0,
        };
        let json = serde_json::to_string(&area).unwrap();
        let parsed: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, area);
        assert_eq!(parsed.radius_meters(), 10_000.0);
    }
}
