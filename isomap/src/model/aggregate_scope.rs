use std::fmt::{self, Display};

use super::StationType;

/// owning scope of an aggregate isochrone: the whole area, or one station
/// type within it. per-station isochrones are not aggregates and carry no
/// scope beyond their storage path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateScope {
    AreaWide,
    StationType(StationType),
}

impl AggregateScope {
    /// value of the "type" property on published aggregate features.
    pub fn kind_label(&self) -> &'static str {
        match self {
            AggregateScope::AreaWide => "area-wide",
            AggregateScope::StationType(_) => "station-type",
        }
    }
}

impl Display for AggregateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateScope::AreaWide => write!(f, "area-wide"),
            AggregateScope::StationType(t) => write!(f, "station-type {t}"),
        }
    }
}
