//! generation orchestration: populates an area's stations from the POI
//! provider and fetches per-station isochrones from the routing provider,
//! pacing outbound calls to respect the provider's rate limiter.

use std::thread;
use std::time::Duration;

use kdam::tqdm;

use super::AppError;
use crate::model::geometry::codec;
use crate::model::style::FeatureStyle;
use crate::model::{Area, AreaScope, DurationBin, Station, StationType};
use crate::store::{AreaStore, IsochroneStore, StationStore};
use isomap_mapbox::IsochroneClient;
use isomap_osm::{PoiClient, PoiElement};

/// minimum spacing between consecutive isochrone provider calls. this is
/// deliberate backpressure against the provider's rate limiter; never reduce
/// the effective spacing.
pub const PROVIDER_PACING: Duration = Duration::from_millis(100);

/// classify a POI element into the station taxonomy from its OSM tags.
pub fn station_type_for(element: &PoiElement) -> StationType {
    if element.tag("railway") == Some("station") {
        StationType::RailStation
    } else if element.tag("railway") == Some("tram_stop") {
        StationType::TramStop
    } else if element.tag("trolleybus") == Some("yes") {
        StationType::TrolleybusStop
    } else {
        StationType::Undefined
    }
}

pub fn station_from_poi(element: &PoiElement) -> Station {
    Station {
        id: element.id.to_string(),
        name: element.name().unwrap_or_default().to_string(),
        lat: element.lat,
        lon: element.lon,
        station_type: station_type_for(element),
        link: Some(format!("https://www.openstreetmap.org/node/{}", element.id)),
    }
}

/// query the POI provider for stations around the area center and bulk
/// replace the area's station set with the result.
pub fn populate_stations(
    poi_client: &PoiClient,
    stations: &StationStore,
    area: &Area,
) -> Result<usize, AppError> {
    let elements =
        poi_client.query_stations(area.center_lat, area.center_lon, area.radius_meters())?;
    let discovered: Vec<Station> = elements.iter().map(station_from_poi).collect();
    stations.replace_all(&area.scope, &discovered)?;
    log::info!(
        "replaced stations for {} with {} provider results",
        area.scope,
        discovered.len()
    );
    Ok(discovered.len())
}

/// fetch and persist one station's isochrones for every duration bin.
/// returns the number of blobs written; failed durations are logged and
/// skipped so siblings still run.
pub fn generate_station_isochrones(
    isochrone_client: &IsochroneClient,
    isochrones: &IsochroneStore,
    scope: &AreaScope,
    station: &Station,
) -> Result<usize, AppError> {
    let mut written = 0usize;
    for (call_index, duration) in DurationBin::ALL.into_iter().enumerate() {
        if call_index > 0 {
            thread::sleep(PROVIDER_PACING);
        }
        let mut feature = match isochrone_client.fetch(station.lat, station.lon, duration.minutes())
        {
            Ok(feature) => feature,
            Err(e) => {
                log::warn!(
                    "skipping {duration} isochrone for station '{}': {e}",
                    station.id
                );
                continue;
            }
        };

        let mut properties = feature.properties.take().unwrap_or_default();
        FeatureStyle::per_station(&station.station_type, duration).write_properties(&mut properties);
        feature.properties = Some(properties);
        let collection = codec::singleton_collection(feature);

        match isochrones.put_station(scope, &station.id, duration, &collection) {
            Ok(()) => written += 1,
            Err(e) => log::warn!(
                "failure persisting {duration} isochrone for station '{}': {e}",
                station.id
            ),
        }
    }
    Ok(written)
}

/// fetch isochrones for every station of an area, sequentially to honor the
/// provider pacing.
pub fn generate_area_isochrones(
    isochrone_client: &IsochroneClient,
    isochrones: &IsochroneStore,
    stations: &StationStore,
    scope: &AreaScope,
) -> Result<usize, AppError> {
    let station_list = stations.list(scope)?;
    if station_list.is_empty() {
        return Err(AppError::PreconditionFailed(format!(
            "no stations recorded for area '{scope}', populate it first"
        )));
    }
    let mut written = 0usize;
    for station in tqdm!(
        station_list.iter(),
        desc = format!("generating isochrones for {scope}")
    ) {
        written += generate_station_isochrones(isochrone_client, isochrones, scope, station)?;
        thread::sleep(PROVIDER_PACING);
    }
    log::info!("wrote {written} station isochrones for {scope}");
    Ok(written)
}

/// cascading area delete: station records first, then isochrone blobs, then
/// the area record. a failure at one step is logged and never blocks the
/// later steps.
pub fn delete_area(
    areas: &AreaStore,
    stations: &StationStore,
    isochrones: &IsochroneStore,
    scope: &AreaScope,
) -> Result<(), AppError> {
    let station_list = match stations.list(scope) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("failure listing stations for {scope} during delete: {e}");
            Vec::new()
        }
    };
    for station in &station_list {
        if let Err(e) = stations.delete(scope, &station.id) {
            log::warn!("failure deleting station record '{}': {e}", station.id);
        }
        if let Err(e) = isochrones.delete_station_all(scope, &station.id) {
            log::warn!("failure deleting isochrones for station '{}': {e}", station.id);
        }
    }

    for duration in DurationBin::ALL {
        if let Err(e) = isochrones.delete_aggregates(scope, duration) {
            log::warn!("failure deleting {duration} aggregates for {scope}: {e}");
        }
    }

    match areas.delete(scope) {
        Ok(true) => log::info!("deleted area {scope}"),
        Ok(false) => log::warn!("area record for {scope} was already absent"),
        Err(e) => log::warn!("failure deleting area record for {scope}: {e}"),
    }
    Ok(())
}
