// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod loader;
pub mod parser;
pub mod persistence;

pub use loader::TextAlmanacLoader;
pub use parser::{parse_almanac, parse_mapping, serialize_almanac, serialize_mapping};
