//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`almanac`]: where an almanac document comes from
//!
//! Use cases depend on these traits only, so the domain and application
//! layers stay independent of files, stdin or any other concrete source.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod almanac;

pub use almanac::AlmanacLoader;
