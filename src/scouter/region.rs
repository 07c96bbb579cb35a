//! Game regions served by the upstream APIs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Taiwan
    Tms,
    /// Korea
    Kms,
    /// South-East Asia
    Msea,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Tms => "tms",
            Region::Kms => "kms",
            Region::Msea => "msea",
        }
    }

    /// Game segment of the Nexon Open API path for this region.
    pub fn nexon_game(&self) -> &'static str {
        match self {
            Region::Tms => "maplestorytw",
            Region::Kms => "maplestory",
            Region::Msea => "maplestorysea",
        }
    }

    /// Only the Korean API publishes an overall ranking.
    pub fn has_overall_ranking(&self) -> bool {
        matches!(self, Region::Kms)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tms" => Ok(Region::Tms),
            "kms" => Ok(Region::Kms),
            "msea" => Ok(Region::Msea),
            other => Err(ConfigError::InvalidRegion(other.to_string())),
        }
    }
}
