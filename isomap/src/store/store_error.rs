use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failure building object store: {0}")]
    Connection(String),
    #[error("failure creating blocking runtime for object store: {0}")]
    Runtime(String),
    #[error("failure accessing object storage at '{path}': {source}")]
    ObjectStore {
        path: String,
        source: object_store::Error,
    },
    #[error("failure decoding stored JSON at '{path}': {source}")]
    Codec {
        path: String,
        source: serde_json::Error,
    },
}
