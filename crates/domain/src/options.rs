use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the numbers on the `seeds:` line are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedLayout {
    /// Every number is one seed.
    Points,
    /// Numbers come in `(start, length)` pairs.
    #[default]
    Ranges,
}

impl fmt::Display for SeedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Points => "points",
            Self::Ranges => "ranges",
        })
    }
}

impl FromStr for SeedLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "points" | "v1" => Ok(Self::Points),
            "ranges" | "v2" => Ok(Self::Ranges),
            other => Err(format!("Unknown seed layout: {other}")),
        }
    }
}
