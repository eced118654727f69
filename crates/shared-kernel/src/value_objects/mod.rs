// crates/shared-kernel/src/value_objects/mod.rs
pub mod measurement;
pub mod range;

pub use measurement::{Measurement, Unit};
pub use range::MeasurementRange;
