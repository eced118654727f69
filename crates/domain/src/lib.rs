//! # Domain
//!
//! The mapping engine: rules, stages and the chain that links them.
//!
//! - [`model`]: `MappingRange`, `Mapping`, `MappingChain` and the parsed `Almanac`
//! - [`options`]: how the seed line of an almanac is read
//!
//! Nothing here performs I/O; every type is immutable after construction and
//! can be shared across threads.

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;

pub use model::{Almanac, Direction, Mapping, MappingChain, MappingRange};
pub use options::SeedLayout;
