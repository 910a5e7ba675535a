pub mod geometry;
pub mod style;

mod aggregate_scope;
mod area;
mod duration_bin;
mod station;
mod station_type;

pub use aggregate_scope::AggregateScope;
pub use area::{Area, AreaScope};
pub use duration_bin::DurationBin;
pub use station::Station;
pub use station_type::StationType;
