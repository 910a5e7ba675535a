use std::sync::Arc;

use geojson::FeatureCollection;
use object_store::path::Path;

use super::{BlobStore, StoreError};
use crate::model::{AreaScope, DurationBin, StationType};

const ISOCHRONE_PREFIX: &str = "isochrone";

/// deterministic layout of isochrone blobs under one area partition:
///
/// ```text
/// isochrone/{scope}/{station_id}/{duration}min.json   per-station
/// isochrone/{scope}/{type_slug}-{duration}min.json    per-station-type
/// isochrone/{scope}/{duration}min.json                area-wide
/// ```
pub struct IsochroneStore {
    blobs: Arc<BlobStore>,
}

impl IsochroneStore {
    pub fn new(blobs: Arc<BlobStore>) -> Self {
        Self { blobs }
    }

    pub fn station_path(scope: &AreaScope, station_id: &str, duration: DurationBin) -> Path {
        Path::from(format!(
            "{ISOCHRONE_PREFIX}/{scope}/{station_id}/{}.json",
            duration.key()
        ))
    }

    pub fn station_type_path(scope: &AreaScope, type_slug: &str, duration: DurationBin) -> Path {
        Path::from(format!(
            "{ISOCHRONE_PREFIX}/{scope}/{type_slug}-{}.json",
            duration.key()
        ))
    }

    pub fn area_path(scope: &AreaScope, duration: DurationBin) -> Path {
        Path::from(format!("{ISOCHRONE_PREFIX}/{scope}/{}.json", duration.key()))
    }

    pub fn put_station(
        &self,
        scope: &AreaScope,
        station_id: &str,
        duration: DurationBin,
        collection: &FeatureCollection,
    ) -> Result<(), StoreError> {
        self.blobs
            .put_json(&Self::station_path(scope, station_id, duration), collection)
    }

    pub fn get_station(
        &self,
        scope: &AreaScope,
        station_id: &str,
        duration: DurationBin,
    ) -> Result<Option<FeatureCollection>, StoreError> {
        self.blobs
            .get_json(&Self::station_path(scope, station_id, duration))
    }

    pub fn put_station_type(
        &self,
        scope: &AreaScope,
        type_slug: &str,
        duration: DurationBin,
        collection: &FeatureCollection,
    ) -> Result<(), StoreError> {
        self.blobs
            .put_json(&Self::station_type_path(scope, type_slug, duration), collection)
    }

    pub fn put_area(
        &self,
        scope: &AreaScope,
        duration: DurationBin,
        collection: &FeatureCollection,
    ) -> Result<(), StoreError> {
        self.blobs
            .put_json(&Self::area_path(scope, duration), collection)
    }

    pub fn get_path(&self, path: &Path) -> Result<Option<FeatureCollection>, StoreError> {
        self.blobs.get_json(path)
    }

    /// delete one duration's blob for a station. `false` when it was absent.
    pub fn delete_station(
        &self,
        scope: &AreaScope,
        station_id: &str,
        duration: DurationBin,
    ) -> Result<bool, StoreError> {
        self.blobs
            .delete(&Self::station_path(scope, station_id, duration))
    }

    /// wildcard delete: remove all five duration blobs for a station. each
    /// deletion is independent; missing blobs are reported per-duration and
    /// never abort the batch.
    pub fn delete_station_all(
        &self,
        scope: &AreaScope,
        station_id: &str,
    ) -> Result<Vec<(DurationBin, bool)>, StoreError> {
        let mut outcomes = Vec::with_capacity(DurationBin::ALL.len());
        for duration in DurationBin::ALL {
            let deleted = self.delete_station(scope, station_id, duration)?;
            if !deleted {
                log::warn!("isochrone {duration} for station '{station_id}' in {scope} not found");
            }
            outcomes.push((duration, deleted));
        }
        Ok(outcomes)
    }

    pub fn delete_aggregates(
        &self,
        scope: &AreaScope,
        duration: DurationBin,
    ) -> Result<(), StoreError> {
        self.blobs.delete(&Self::area_path(scope, duration))?;
        for station_type in StationType::AGGREGATED {
            if let Some(slug) = station_type.slug() {
                self.blobs
                    .delete(&Self::station_type_path(scope, slug, duration))?;
            }
        }
        Ok(())
    }

    /// discover the per-station blobs to aggregate for one duration. area and
    /// station-type aggregates share the same prefix, so candidates must have
    /// exactly the station-file shape: `isochrone/{scope}/{id}/{n}min.json`.
    pub fn list_station_files(
        &self,
        scope: &AreaScope,
        duration: DurationBin,
    ) -> Result<Vec<Path>, StoreError> {
        let prefix = Path::from(format!("{ISOCHRONE_PREFIX}/{scope}"));
        let filename = format!("{}.json", duration.key());
        let paths = self
            .blobs
            .list_prefix(&prefix)?
            .into_iter()
            .filter(|path| {
                let parts: Vec<_> = path.parts().collect();
                parts.len() == 4 && parts[3].as_ref() == filename
            })
            .collect();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geometry::codec;
    use crate::store::ObjectStoreSource;
    use geo::{polygon, Geometry};

    fn store() -> IsochroneStore {
        let blobs = BlobStore::new(ObjectStoreSource::InMemory.build().unwrap()).unwrap();
        IsochroneStore::new(Arc::new(blobs))
    }

    fn scope() -> AreaScope {
        AreaScope::new("it", "roma")
    }

    fn sample_collection() -> FeatureCollection {
        let geometry = Geometry::Polygon(polygon![
            (x: 12.49, y: 41.89),
            (x: 12.51, y: 41.89),
            (x: 12.51, y: 41.91),
            (x: 12.49, y: 41.89),
        ]);
        codec::singleton_collection(codec::to_feature(&geometry, None))
    }

    #[test]
    fn test_path_shapes() {
        let scope = scope();
        assert_eq!(
            IsochroneStore::station_path(&scope, "123", DurationBin::Min10).to_string(),
            "isochrone/it-roma/123/10min.json"
        );
        assert_eq!(
            IsochroneStore::station_type_path(&scope, "tram_stop", DurationBin::Min5).to_string(),
            "isochrone/it-roma/tram_stop-5min.json"
        );
        assert_eq!(
            IsochroneStore::area_path(&scope, DurationBin::Min30).to_string(),
            "isochrone/it-roma/30min.json"
        );
    }

    #[test]
    fn test_round_trip_geometry_equal() {
        let store = store();
        let scope = scope();
        let collection = sample_collection();
        let original = codec::collection_geometry(&collection).unwrap();
        store
            .put_station(&scope, "123", DurationBin::Min10, &collection)
            .unwrap();
        let restored = store
            .get_station(&scope, "123", DurationBin::Min10)
            .unwrap()
            .unwrap();
        assert_eq!(codec::collection_geometry(&restored).unwrap(), original);
    }

    #[test]
    fn test_get_absent_is_none() {
        let store = store();
        let read = store.get_station(&scope(), "nope", DurationBin::Min5).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_list_station_files_excludes_aggregates() {
        let store = store();
        let scope = scope();
        let collection = sample_collection();
        store
            .put_station(&scope, "1", DurationBin::Min10, &collection)
            .unwrap();
        store
            .put_station(&scope, "2", DurationBin::Min10, &collection)
            .unwrap();
        store
            .put_station(&scope, "1", DurationBin::Min5, &collection)
            .unwrap();
        store.put_area(&scope, DurationBin::Min10, &collection).unwrap();
        store
            .put_station_type(&scope, "tram_stop", DurationBin::Min10, &collection)
            .unwrap();

        let mut listed: Vec<String> = store
            .list_station_files(&scope, DurationBin::Min10)
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect();
        listed.sort();
        assert_eq!(
            listed,
            vec![
                "isochrone/it-roma/1/10min.json",
                "isochrone/it-roma/2/10min.json"
            ]
        );
    }

    #[test]
    fn test_wildcard_delete_independent_per_duration() {
        let store = store();
        let scope = scope();
        let collection = sample_collection();
        // three of the five durations written
        for duration in [DurationBin::Min5, DurationBin::Min10, DurationBin::Min30] {
            store.put_station(&scope, "9", duration, &collection).unwrap();
        }
        let outcomes = store.delete_station_all(&scope, "9").unwrap();
        assert_eq!(outcomes.len(), 5);
        let deleted: Vec<bool> = outcomes.iter().map(|(_, d)| *d).collect();
        assert_eq!(deleted, vec![true, true, false, false, true]);
        for duration in DurationBin::ALL {
            assert!(store.get_station(&scope, "9", duration).unwrap().is_none());
        }
    }
}
