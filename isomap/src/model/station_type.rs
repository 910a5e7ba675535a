use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// transit stop classification. `Undefined` is kept because the POI provider
/// returns stops this pipeline cannot classify; such stops still get
/// per-station isochrones but are excluded from station-type aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    RailStation,
    TramStop,
    TrolleybusStop,
    Undefined,
}

impl StationType {
    /// station types that produce per-type aggregate isochrones.
    pub const AGGREGATED: [StationType; 3] = [
        StationType::RailStation,
        StationType::TramStop,
        StationType::TrolleybusStop,
    ];

    /// storage path fragment for per-type aggregate blobs. `None` for
    /// `Undefined`, which never owns an aggregate.
    pub fn slug(&self) -> Option<&'static str> {
        match self {
            StationType::RailStation => Some("station"),
            StationType::TramStop => Some("tram_stop"),
            StationType::TrolleybusStop => Some("trolleybus"),
            StationType::Undefined => None,
        }
    }
}

impl Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug().unwrap_or("undefined"))
    }
}

impl FromStr for StationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "station" => Ok(StationType::RailStation),
            "tram_stop" => Ok(StationType::TramStop),
            "trolleybus" => Ok(StationType::TrolleybusStop),
            "undefined" => Ok(StationType::Undefined),
            _ => Err(format!(
                "unknown station type '{s}', expected station|tram_stop|trolleybus|undefined"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for station_type in StationType::AGGREGATED {
            let slug = station_type.slug().unwrap();
            assert_eq!(StationType::from_str(slug), Ok(station_type));
        }
    }

    #[test]
    fn test_undefined_has_no_slug() {
        assert_eq!(StationType::Undefined.slug(), None);
        assert!(!StationType::AGGREGATED.contains(&StationType::Undefined));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&StationType::TramStop).unwrap();
        assert_eq!(json, "\"tram_stop\"");
        let parsed: StationType = serde_json::from_str("\"trolleybus_stop\"").unwrap();
        assert_eq!(parsed, StationType::TrolleybusStop);
    }
}
