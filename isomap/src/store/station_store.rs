use std::sync::Arc;

use object_store::path::Path;

use super::{BlobStore, StoreError};
use crate::model::{AreaScope, Station};

const STATION_PREFIX: &str = "station";

/// station records at `station/{scope}/{station_id}.json`, owned by their
/// area partition.
pub struct StationStore {
    blobs: Arc<BlobStore>,
}

impl StationStore {
    pub fn new(blobs: Arc<BlobStore>) -> Self {
        Self { blobs }
    }

    fn path(scope: &AreaScope, station_id: &str) -> Path {
        Path::from(format!("{STATION_PREFIX}/{scope}/{station_id}.json"))
    }

    fn prefix(scope: &AreaScope) -> Path {
        Path::from(format!("{STATION_PREFIX}/{scope}"))
    }

    pub fn get(&self, scope: &AreaScope, station_id: &str) -> Result<Option<Station>, StoreError> {
        self.blobs.get_json(&Self::path(scope, station_id))
    }

    pub fn put(&self, scope: &AreaScope, station: &Station) -> Result<(), StoreError> {
        self.blobs.put_json(&Self::path(scope, &station.id), station)
    }

    pub fn delete(&self, scope: &AreaScope, station_id: &str) -> Result<bool, StoreError> {
        self.blobs.delete(&Self::path(scope, station_id))
    }

    pub fn list(&self, scope: &AreaScope) -> Result<Vec<Station>, StoreError> {
        let paths = self.blobs.list_prefix(&Self::prefix(scope))?;
        let mut stations = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(station) = self.blobs.get_json::<Station>(&path)? {
                stations.push(station);
            }
        }
        Ok(stations)
    }

    /// bulk replace for a population run: every prior station for the area is
    /// deleted before the new set is inserted, so stations absent from the
    /// latest provider response disappear. not incremental.
    pub fn replace_all(&self, scope: &AreaScope, stations: &[Station]) -> Result<(), StoreError> {
        for path in self.blobs.list_prefix(&Self::prefix(scope))? {
            if let Err(e) = self.blobs.delete(&path) {
                log::warn!("failure deleting prior station record '{path}': {e}");
            }
        }
        for station in stations {
            self.put(scope, station)?;
        }
        Ok(())
    }
}
