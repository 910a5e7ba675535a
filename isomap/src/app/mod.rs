pub mod aggregate_ops;
pub mod generate_ops;
pub mod union_ops;

mod app_error;
mod configuration;
mod isomap_app;

pub use app_error::AppError;
pub use configuration::AppConfiguration;
pub use isomap_app::{IsomapApp, IsomapOperation};
