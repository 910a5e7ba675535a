use geojson::JsonObject;
use serde_json::json;

use crate::model::{AggregateScope, DurationBin, StationType};

const RAIL_COLOR: &str = "#22c55e";
const TRAM_COLOR: &str = "#eab308";
const TROLLEYBUS_COLOR: &str = "#3b82f6";
const UNDEFINED_COLOR: &str = "#6b7280";
const AREA_COLOR: &str = "#3b82f6";

/// presentation attributes attached to every published isochrone feature.
///
/// there are two distinct styling tables with different producers: the fetch
/// path styles individual per-station isochrones, the union engine styles
/// aggregates. they share colors but not opacities or stroke widths, and the
/// two constructors below must not be merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub fill_opacity: f64,
    pub stroke_width: f64,
}

impl FeatureStyle {
    /// styling for a single station's isochrone as produced by the fetch
    /// adapter. faint fill, no outline except on the widest contour.
    pub fn per_station(station_type: &StationType, duration: DurationBin) -> Self {
        let color = type_color(station_type);
        let stroke_width = match duration {
            DurationBin::Min30 => 2.0,
            _ => 0.0,
        };
        Self {
            fill: color,
            stroke: color,
            fill_opacity: 0.1,
            stroke_width,
        }
    }

    /// styling for a union-engine aggregate.
    pub fn aggregate(scope: &AggregateScope) -> Self {
        match scope {
            AggregateScope::AreaWide => Self {
                fill: AREA_COLOR,
                stroke: AREA_COLOR,
                fill_opacity: 0.15,
                stroke_width: 2.0,
            },
            AggregateScope::StationType(station_type) => {
                let color = type_color(station_type);
                Self {
                    fill: color,
                    stroke: color,
                    fill_opacity: 0.2,
                    stroke_width: 2.0,
                }
            }
        }
    }

    pub fn write_properties(&self, properties: &mut JsonObject) {
        properties.insert(String::from("fill"), json!(self.fill));
        properties.insert(String::from("stroke"), json!(self.stroke));
        properties.insert(String::from("fill-opacity"), json!(self.fill_opacity));
        properties.insert(String::from("stroke-width"), json!(self.stroke_width));
    }
}

fn type_color(station_type: &StationType) -> &'static str {
    match station_type {
        StationType::RailStation => RAIL_COLOR,
        StationType::TramStop => TRAM_COLOR,
        StationType::TrolleybusStop => TROLLEYBUS_COLOR,
        StationType::Undefined => UNDEFINED_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_station_table() {
        let style = FeatureStyle::per_station(&StationType::RailStation, DurationBin::Min10);
        assert_eq!(style.fill, "#22c55e");
        assert_eq!(style.fill_opacity, 0.1);
        assert_eq!(style.stroke_width, 0.0);

        let widest = FeatureStyle::per_station(&StationType::TramStop, DurationBin::Min30);
        assert_eq!(widest.fill, "#eab308");
        assert_eq!(widest.stroke_width, 2.0);

        let unknown = FeatureStyle::per_station(&StationType::Undefined, DurationBin::Min5);
        assert_eq!(unknown.fill, "#6b7280");
    }

    #[test]
    fn test_aggregate_table() {
        let area = FeatureStyle::aggregate(&AggregateScope::AreaWide);
        assert_eq!(area.fill, "#3b82f6");
        assert_eq!(area.fill_opacity, 0.15);
        assert_eq!(area.stroke_width, 2.0);

        let trolleybus =
            FeatureStyle::aggregate(&AggregateScope::StationType(StationType::TrolleybusStop));
        assert_eq!(trolleybus.fill, "#3b82f6");
        assert_eq!(trolleybus.fill_opacity, 0.2);
    }

    #[test]
    fn test_write_properties_keys() {
        let style = FeatureStyle::aggregate(&AggregateScope::AreaWide);
        let mut properties = JsonObject::new();
        style.write_properties(&mut properties);
        assert_eq!(properties.get("fill").unwrap(), "#3b82f6");
        assert_eq!(properties.get("stroke").unwrap(), "#3b82f6");
        assert_eq!(
            properties.get("fill-opacity").and_then(|v| v.as_f64()),
            Some(0.15)
        );
        assert_eq!(
            properties.get("stroke-width").and_then(|v| v.as_f64()),
            Some(2.0)
        );
    }
}
