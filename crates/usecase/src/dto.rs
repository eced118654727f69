use almanac_domain::{Mapping, SeedLayout};
use almanac_shared_kernel::{Measurement, Unit};
use serde::Serialize;

use crate::reducer::Reduction;

/// One stage as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub source: Unit,
    pub destination: Unit,
    pub rules: usize,
}

impl From<&Mapping> for StageSummary {
    fn from(mapping: &Mapping) -> Self {
        Self {
            source: mapping.source().clone(),
            destination: mapping.destination().clone(),
            rules: mapping.ranges().len(),
        }
    }
}

/// Everything a solve run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutput {
    pub source: String,
    pub layout: SeedLayout,
    pub stages: Vec<StageSummary>,
    pub reduction: Reduction,
    /// Path of the requested first-unit value through every stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<Measurement>>,
    /// First-unit value the requested final-unit value maps back to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub located: Option<Located>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub from: Measurement,
    pub to: Measurement,
}
