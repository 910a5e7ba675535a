use std::sync::Arc;

use object_store::path::Path;

use super::{BlobStore, StoreError};
use crate::model::{Area, AreaScope};

const AREA_PREFIX: &str = "area";

/// area records at `area/{scope}.json`. full replace on write.
pub struct AreaStore {
    blobs: Arc<BlobStore>,
}

impl AreaStore {
    pub fn new(blobs: Arc<BlobStore>) -> Self {
        Self { blobs }
    }

    fn path(scope: &AreaScope) -> Path {
        Path::from(format!("{AREA_PREFIX}/{scope}.json"))
    }

    pub fn get(&self, scope: &AreaScope) -> Result<Option<Area>, StoreError> {
        self.blobs.get_json(&Self::path(scope))
    }

    pub fn put(&self, area: &Area) -> Result<(), StoreError> {
        self.blobs.put_json(&Self::path(&area.scope), area)
    }

    pub fn delete(&self, scope: &AreaScope) -> Result<bool, StoreError> {
        self.blobs.delete(&Self::path(scope))
    }

    pub fn list(&self) -> Result<Vec<Area>, StoreError> {
        let paths = self.blobs.list_prefix(&Path::from(AREA_PREFIX))?;
        let mut areas = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(area) = self.blobs.get_json::<Area>(&path)? {
                areas.push(area);
            }
        }
        Ok(areas)
    }
}
