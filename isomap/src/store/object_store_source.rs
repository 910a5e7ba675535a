use std::sync::Arc;

use object_store::{aws::AmazonS3Builder, local::LocalFileSystem, memory::InMemory, ObjectStore};
use serde::{Deserialize, Serialize};

use super::StoreError;

/// backing object storage for all station, area, and isochrone blobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ObjectStoreSource {
    FileSystem { root: String },
    AmazonS3 { bucket: String },
    InMemory,
}

impl Default for ObjectStoreSource {
    fn default() -> Self {
        ObjectStoreSource::FileSystem {
            root: String::from("./data"),
        }
    }
}

impl ObjectStoreSource {
    pub fn build(&self) -> Result<Arc<dyn ObjectStore>, StoreError> {
        match self {
            ObjectStoreSource::FileSystem { root } => {
                std::fs::create_dir_all(root)
                    .map_err(|e| StoreError::Connection(format!("failure creating '{root}': {e}")))?;
                let store = LocalFileSystem::new_with_prefix(root)
                    .map_err(|e| StoreError::Connection(e.to_string()))?;
                Ok(Arc::new(store))
            }
            ObjectStoreSource::AmazonS3 { bucket } => {
                let store = AmazonS3Builder::from_env()
                    .with_bucket_name(bucket)
                    .build()
                    .map_err(|e| StoreError::Connection(e.to_string()))?;
                Ok(Arc::new(store))
            }
            ObjectStoreSource::InMemory => Ok(Arc::new(InMemory::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_file_system_config() {
        let source: ObjectStoreSource =
            toml::from_str("type = \"file_system\"\nroot = \"/tmp/isomap\"").unwrap();
        match source {
            ObjectStoreSource::FileSystem { root } => assert_eq!(root, "/tmp/isomap"),
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn test_in_memory_builds() {
        assert!(ObjectStoreSource::InMemory.build().is_ok());
    }
}
