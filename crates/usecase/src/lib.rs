//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`reducer`]: range-aware minimum search over a mapping chain
//! - [`orchestrator`]: load an almanac through a port and solve it
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod reducer;

pub use dto::{Located, SolveOutput, StageSummary};
pub use orchestrator::{SolveAlmanac, SolvePlan};
pub use reducer::{Parallelism, RangeReducer, Reduction, point_minimum, scan_minimum};
