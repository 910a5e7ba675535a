pub mod codec;
pub mod geometry_ops;

mod geometry_error;

pub use geometry_error::GeometryError;
