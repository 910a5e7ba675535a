//! aggregation orchestration: discovers the per-station isochrone blobs for
//! an area, feeds them through the union engine, and persists the aggregate.
//! per-item failures are logged and skipped; only missing preconditions abort
//! a command.

use geo::Geometry;

use super::{union_ops, AppError};
use crate::model::geometry::codec;
use crate::model::{AggregateScope, AreaScope, DurationBin, StationType};
use crate::store::{IsochroneStore, StationStore};

/// union all per-station isochrones of an area for one duration and persist
/// the result at `isochrone/{scope}/{duration}min.json`. collecting zero
/// usable geometries is a warning, not an error: other durations must still
/// be attempted by the caller.
pub fn aggregate_area(
    isochrones: &IsochroneStore,
    scope: &AreaScope,
    duration: DurationBin,
) -> Result<(), AppError> {
    let paths = isochrones.list_station_files(scope, duration)?;
    let mut geometries: Vec<Geometry<f64>> = Vec::with_capacity(paths.len());
    for path in &paths {
        match isochrones.get_path(path) {
            Ok(Some(collection)) => match codec::collection_geometry(&collection) {
                Ok(geometry) => geometries.push(geometry),
                Err(e) => log::warn!("skipping unparseable isochrone '{path}': {e}"),
            },
            Ok(None) => log::warn!("isochrone '{path}' vanished during aggregation, skipping"),
            Err(e) => log::warn!("skipping unreadable isochrone '{path}': {e}"),
        }
    }

    if geometries.is_empty() {
        log::warn!("no usable station isochrones for {scope} {duration}, skipping aggregate");
        return Ok(());
    }

    let collection = union_ops::aggregate(&geometries, &AggregateScope::AreaWide, duration)?;
    isochrones.put_area(scope, duration, &collection)?;
    log::info!(
        "aggregated {} station isochrones into area-wide {scope} {duration}",
        geometries.len()
    );
    Ok(())
}

/// union the isochrones of all stations of one type within an area for one
/// duration and persist the result at
/// `isochrone/{scope}/{type_slug}-{duration}min.json`.
pub fn aggregate_station_type(
    isochrones: &IsochroneStore,
    stations: &StationStore,
    scope: &AreaScope,
    station_type: StationType,
    duration: DurationBin,
) -> Result<(), AppError> {
    let Some(slug) = station_type.slug() else {
        log::warn!("station type '{station_type}' has no aggregate scope, skipping");
        return Ok(());
    };

    let matching: Vec<_> = stations
        .list(scope)?
        .into_iter()
        .filter(|s| s.station_type == station_type)
        .collect();

    let mut geometries: Vec<Geometry<f64>> = Vec::with_capacity(matching.len());
    for station in &matching {
        match isochrones.get_station(scope, &station.id, duration) {
            Ok(Some(collection)) => match codec::collection_geometry(&collection) {
                Ok(geometry) => geometries.push(geometry),
                Err(e) => log::warn!(
                    "skipping unparseable isochrone for station '{}': {e}",
                    station.id
                ),
            },
            Ok(None) => log::warn!(
                "no {duration} isochrone for station '{}' in {scope}, skipping",
                station.id
            ),
            Err(e) => log::warn!(
                "skipping unreadable isochrone for station '{}': {e}",
                station.id
            ),
        }
    }

    if geometries.is_empty() {
        log::warn!("no usable {slug} isochrones for {scope} {duration}, skipping aggregate");
        return Ok(());
    }

    let collection = union_ops::aggregate(
        &geometries,
        &AggregateScope::StationType(station_type),
        duration,
    )?;
    isochrones.put_station_type(scope, slug, duration, &collection)?;
    log::info!(
        "aggregated {} {slug} isochrones for {scope} {duration}",
        geometries.len()
    );
    Ok(())
}

/// regenerate every aggregate for an area: each duration gets the area-wide
/// union plus one union per defined station type. every (target, duration)
/// pair is isolated; a failure is logged and never gates later pairs.
pub fn aggregate_all(
    isochrones: &IsochroneStore,
    stations: &StationStore,
    scope: &AreaScope,
) -> Result<(), AppError> {
    let mut failures = 0usize;
    for duration in DurationBin::ALL {
        if let Err(e) = aggregate_area(isochrones, scope, duration) {
            failures += 1;
            log::error!("failure aggregating {scope} {duration}: {e}");
        }
        for station_type in StationType::AGGREGATED {
            if let Err(e) =
                aggregate_station_type(isochrones, stations, scope, station_type, duration)
            {
                failures += 1;
                log::error!("failure aggregating {scope} {station_type} {duration}: {e}");
            }
        }
    }
    if failures > 0 {
        log::warn!("{failures} aggregation targets failed for {scope}");
    }
    Ok(())
}
