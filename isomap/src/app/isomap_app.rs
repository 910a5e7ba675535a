use std::sync::Arc;

use clap::{Parser, Subcommand};

use super::{aggregate_ops, generate_ops, AppConfiguration, AppError};
use crate::model::{Area, AreaScope, DurationBin};
use crate::store::{AreaStore, BlobStore, IsochroneStore, StationStore};
use isomap_mapbox::IsochroneClient;
use isomap_osm::PoiClient;

/// command line tool for populating and aggregating transit station
/// isochrones per geographic area
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct IsomapApp {
    #[command(subcommand)]
    pub op: IsomapOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum IsomapOperation {
    /// create or fully replace an area record
    PutArea {
        #[arg(long, help = "path to file with isomap configuration")]
        config: Option<String>,
        #[arg(long, help = "two-letter country code")]
        country: String,
        #[arg(long, help = "area id, unique within the country")]
        area_id: String,
        #[arg(long, help = "display name")]
        name: String,
        #[arg(long, help = "center latitude")]
        lat: f64,
        #[arg(long, help = "center longitude")]
        lon: f64,
        #[arg(long, help = "area diameter in meters")]
        diameter: f64,
    },
    /// replace an area's stations with the POI provider's current results
    Populate {
        #[arg(long, help = "path to file with isomap configuration")]
        config: Option<String>,
        #[arg(long, help = "two-letter country code")]
        country: String,
        #[arg(long, help = "area id, unique within the country")]
        area_id: String,
    },
    /// fetch per-station isochrones from the routing provider
    Generate {
        #[arg(long, help = "path to file with isomap configuration")]
        config: Option<String>,
        #[arg(long, help = "two-letter country code")]
        country: String,
        #[arg(long, help = "area id, unique within the country")]
        area_id: String,
    },
    /// union per-station isochrones into area-wide and per-type aggregates
    Aggregate {
        #[arg(long, help = "path to file with isomap configuration")]
        config: Option<String>,
        #[arg(long, help = "two-letter country code")]
        country: String,
        #[arg(long, help = "area id, unique within the country")]
        area_id: String,
    },
    /// delete one station's isochrones, one duration or all of them
    DeleteIsochrones {
        #[arg(long, help = "path to file with isomap configuration")]
        config: Option<String>,
        #[arg(long, help = "two-letter country code")]
        country: String,
        #[arg(long, help = "area id, unique within the country")]
        area_id: String,
        #[arg(long, help = "station id")]
        station_id: String,
        #[arg(long, help = "duration in minutes (5|10|15|20|30); omit for all")]
        duration: Option<u32>,
    },
    /// delete an area with all of its stations and isochrone blobs
    DeleteArea {
        #[arg(long, help = "path to file with isomap configuration")]
        config: Option<String>,
        #[arg(long, help = "two-letter country code")]
        country: String,
        #[arg(long, help = "area id, unique within the country")]
        area_id: String,
    },
}

struct Stores {
    areas: AreaStore,
    stations: StationStore,
    isochrones: IsochroneStore,
}

fn load_configuration(config: &Option<String>) -> Result<AppConfiguration, AppError> {
    match config {
        None => Ok(AppConfiguration::default()),
        Some(f) => {
            log::info!("reading isomap configuration from {f}");
            AppConfiguration::try_from(f)
        }
    }
}

fn build_stores(configuration: &AppConfiguration) -> Result<Stores, AppError> {
    let blobs = Arc::new(BlobStore::new(configuration.object_store.build()?)?);
    Ok(Stores {
        areas: AreaStore::new(blobs.clone()),
        stations: StationStore::new(blobs.clone()),
        isochrones: IsochroneStore::new(blobs),
    })
}

/// the area record must exist before any population, generation, or
/// aggregation command touches its partition.
fn require_area(stores: &Stores, scope: &AreaScope) -> Result<Area, AppError> {
    stores
        .areas
        .get(scope)?
        .ok_or_else(|| AppError::PreconditionFailed(format!("area '{scope}' not found")))
}

impl IsomapOperation {
    pub fn run(self) -> Result<(), AppError> {
        match self {
            IsomapOperation::PutArea {
                config,
                country,
                area_id,
                name,
                lat,
                lon,
                diameter,
            } => {
                let configuration = load_configuration(&config)?;
                let stores = build_stores(&configuration)?;
                let area = Area {
                    scope: AreaScope::new(&country, &area_id),
                    name,
                    center_lat: lat,
                    center_lon: lon,
                    diameter_meters: diameter,
                };
                stores.areas.put(&area)?;
                log::info!("stored area {}", area.scope);
                Ok(())
            }
            IsomapOperation::Populate {
                config,
                country,
                area_id,
            } => {
                let configuration = load_configuration(&config)?;
                let stores = build_stores(&configuration)?;
                let scope = AreaScope::new(&country, &area_id);
                let area = require_area(&stores, &scope)?;
                let poi_client = PoiClient::new(configuration.poi_provider.clone())?;
                let count = generate_ops::populate_stations(&poi_client, &stores.stations, &area)?;
                eprintln!("populated {count} stations for {scope}");
                Ok(())
            }
            IsomapOperation::Generate {
                config,
                country,
                area_id,
            } => {
                let configuration = load_configuration(&config)?;
                let stores = build_stores(&configuration)?;
                let scope = AreaScope::new(&country, &area_id);
                require_area(&stores, &scope)?;
                let isochrone_client =
                    IsochroneClient::new(configuration.isochrone_provider.clone())?;
                let written = generate_ops::generate_area_isochrones(
                    &isochrone_client,
                    &stores.isochrones,
                    &stores.stations,
                    &scope,
                )?;
                eprintln!("wrote {written} isochrones for {scope}");
                Ok(())
            }
            IsomapOperation::Aggregate {
                config,
                country,
                area_id,
            } => {
                let configuration = load_configuration(&config)?;
                let stores = build_stores(&configuration)?;
                let scope = AreaScope::new(&country, &area_id);
                require_area(&stores, &scope)?;
                aggregate_ops::aggregate_all(&stores.isochrones, &stores.stations, &scope)?;
                eprintln!("aggregation finished for {scope}");
                Ok(())
            }
            IsomapOperation::DeleteIsochrones {
                config,
                country,
                area_id,
                station_id,
                duration,
            } => {
                let configuration = load_configuration(&config)?;
                let stores = build_stores(&configuration)?;
                let scope = AreaScope::new(&country, &area_id);
                match duration {
                    Some(minutes) => {
                        let bin = DurationBin::try_from(minutes)
                            .map_err(AppError::ConfigurationError)?;
                        let deleted =
                            stores.isochrones.delete_station(&scope, &station_id, bin)?;
                        if !deleted {
                            log::warn!(
                                "isochrone {bin} for station '{station_id}' in {scope} not found"
                            );
                        }
                    }
                    None => {
                        stores
                            .isochrones
                            .delete_station_all(&scope, &station_id)?;
                    }
                }
                Ok(())
            }
            IsomapOperation::DeleteArea {
                config,
                country,
                area_id,
            } => {
                let configuration = load_configuration(&config)?;
                let stores = build_stores(&configuration)?;
                let scope = AreaScope::new(&country, &area_id);
                generate_ops::delete_area(
                    &stores.areas,
                    &stores.stations,
                    &stores.isochrones,
                    &scope,
                )
            }
        }
    }
}
