use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// one of the fixed walking-time contours this pipeline generates and
/// aggregates. the set is closed; providers are only ever asked for these
/// five contours and storage paths are keyed by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DurationBin {
    Min5,
    Min10,
    Min15,
    Min20,
    Min30,
}

impl DurationBin {
    pub const ALL: [DurationBin; 5] = [
        DurationBin::Min5,
        DurationBin::Min10,
        DurationBin::Min15,
        DurationBin::Min20,
        DurationBin::Min30,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            DurationBin::Min5 => 5,
            DurationBin::Min10 => 10,
            DurationBin::Min15 => 15,
            DurationBin::Min20 => 20,
            DurationBin::Min30 => 30,
        }
    }

    /// filename fragment used in every storage path for this bin.
    pub fn key(&self) -> String {
        format!("{}min", self.minutes())
    }
}

impl Display for DurationBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl From<DurationBin> for u32 {
    fn from(value: DurationBin) -> Self {
        value.minutes()
    }
}

impl TryFrom<u32> for DurationBin {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            5 => Ok(DurationBin::Min5),
            10 => Ok(DurationBin::Min10),
            15 => Ok(DurationBin::Min15),
            20 => Ok(DurationBin::Min20),
            30 => Ok(DurationBin::Min30),
            _ => Err(format!(
                "unsupported isochrone duration '{minutes}', expected one of 5|10|15|20|30"
            )),
        }
    }
}
