mod area_store;
mod blob_store;
mod isochrone_store;
mod object_store_source;
mod station_store;
mod store_error;

pub use area_store::AreaStore;
pub use blob_store::BlobStore;
pub use isochrone_store::IsochroneStore;
pub use object_store_source::ObjectStoreSource;
pub use station_store::StationStore;
pub use store_error::StoreError;
