use std::sync::Arc;

use futures::StreamExt;
use object_store::{path::Path, ObjectStore, PutPayload};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::StoreError;

/// blocking facade over an [`ObjectStore`]. the pipeline is a sequential
/// operator-driven process, so storage I/O runs on a single current-thread
/// runtime owned here rather than leaking async through the call graph.
pub struct BlobStore {
    store: Arc<dyn ObjectStore>,
    runtime: tokio::runtime::Runtime,
}

impl BlobStore {
    pub fn new(store: Arc<dyn ObjectStore>) -> Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;
        Ok(Self { store, runtime })
    }

    /// read a JSON blob. absence is `Ok(None)`, not an error; aggregation
    /// treats missing per-item blobs as skippable.
    pub fn get_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StoreError> {
        let result = self.runtime.block_on(async {
            match self.store.get(path).await {
                Ok(response) => response.bytes().await.map(Some),
                Err(object_store::Error::NotFound { .. }) => Ok(None),
                Err(e) => Err(e),
            }
        });
        let bytes = result.map_err(|e| StoreError::ObjectStore {
            path: path.to_string(),
            source: e,
        })?;
        match bytes {
            None => Ok(None),
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes).map_err(|e| StoreError::Codec {
                    path: path.to_string(),
                    source: e,
                })?;
                Ok(Some(value))
            }
        }
    }

    /// write a JSON blob with overwrite semantics.
    pub fn put_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value).map_err(|e| StoreError::Codec {
            path: path.to_string(),
            source: e,
        })?;
        self.runtime
            .block_on(self.store.put(path, PutPayload::from(bytes)))
            .map_err(|e| StoreError::ObjectStore {
                path: path.to_string(),
                source: e,
            })?;
        Ok(())
    }

    /// delete a blob. returns `false` when it did not exist; a missing blob
    /// is reported, not an error. some backends treat deleting an absent key
    /// as success, so existence is probed via `head` before deleting.
    pub fn delete(&self, path: &Path) -> Result<bool, StoreError> {
        let result = self.runtime.block_on(async {
            match self.store.head(path).await {
                Ok(_) => match self.store.delete(path).await {
                    Ok(()) => Ok(true),
                    Err(object_store::Error::NotFound { .. }) => Ok(false),
                    Err(e) => Err(e),
                },
                Err(object_store::Error::NotFound { .. }) => Ok(false),
                Err(e) => Err(e),
            }
        });
        result.map_err(|e| StoreError::ObjectStore {
            path: path.to_string(),
            source: e,
        })
    }

    /// list all blob paths under a prefix.
    pub fn list_prefix(&self, prefix: &Path) -> Result<Vec<Path>, StoreError> {
        let metas = self
            .runtime
            .block_on(self.store.list(Some(prefix)).collect::<Vec<_>>())
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ObjectStore {
                path: prefix.to_string(),
                source: e,
            })?;
        Ok(metas.into_iter().map(|meta| meta.location).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ObjectStoreSource;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        value: u32,
    }

    fn blob_store() -> BlobStore {
        BlobStore::new(ObjectStoreSource::InMemory.build().unwrap()).unwrap()
    }

    #[test]
    fn test_put_get_round_trip() {
        let store = blob_store();
        let path = Path::from("test/payload.json");
        store.put_json(&path, &Payload { value: 7 }).unwrap();
        let read: Option<Payload> = store.get_json(&path).unwrap();
        assert_eq!(read, Some(Payload { value: 7 }));
    }

    #[test]
    fn test_get_absent_is_none() {
        let store = blob_store();
        let read: Option<Payload> = store.get_json(&Path::from("missing.json")).unwrap();
        assert_eq!(read, None);
    }

    #[test]
    fn test_delete_reports_absence() {
        let store = blob_store();
        let path = Path::from("test/once.json");
        store.put_json(&path, &Payload { value: 1 }).unwrap();
        assert!(store.delete(&path).unwrap());
        assert!(!store.delete(&path).unwrap());
    }

    #[test]
    fn test_list_prefix() {
        let store = blob_store();
        store
            .put_json(&Path::from("a/one.json"), &Payload { value: 1 })
            .unwrap();
        store
            .put_json(&Path::from("a/two.json"), &Payload { value: 2 })
            .unwrap();
        store
            .put_json(&Path::from("b/three.json"), &Payload { value: 3 })
            .unwrap();
        let listed = store.list_prefix(&Path::from("a")).unwrap();
        assert_eq!(listed.len(), 2);
    }
}
