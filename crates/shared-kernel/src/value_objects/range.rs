// crates/shared-kernel/src/value_objects/range.rs
use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::{
    error::{DomainError, DomainResult},
    value_objects::{Measurement, Unit},
};

/// Inclusive interval `[min, max]` of measurements sharing one unit.
///
/// Deserialization goes through [`MeasurementRange::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurementRange")]
pub struct MeasurementRange {
    min: Measurement,
    max: Measurement,
}

#[derive(Deserialize)]
struct RawMeasurementRange {
    min: Measurement,
    max: Measurement,
}

impl TryFrom<RawMeasurementRange> for MeasurementRange {
    type Error = DomainError;

    fn try_from(raw: RawMeasurementRange) -> DomainResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl MeasurementRange {
    /// Builds a range from two measurements.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` when the bounds disagree on the unit, `InvalidRange`
    /// when `min` lies above `max`.
    pub fn new(min: Measurement, max: Measurement) -> DomainResult<Self> {
        if min.unit() != max.unit() {
            return Err(DomainError::UnitMismatch {
                expected: min.unit().clone(),
                found: max.unit().clone(),
            });
        }
        if min.value() > max.value() {
            return Err(DomainError::InvalidRange { min: min.value(), max: max.value() });
        }
        Ok(Self { min, max })
    }

    /// Builds `[min, max]` in `unit`.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `min > max`.
    pub fn from_bounds(min: u64, max: u64, unit: impl Into<Unit>) -> DomainResult<Self> {
        let unit = unit.into();
        Self::new(Measurement::new(min, unit.clone()), Measurement::new(max, unit))
    }

    /// Builds the range of `length` values starting at `start`.
    ///
    /// # Errors
    ///
    /// `EmptyRange` for a zero length, `SeedRangeOverflow` when the last
    /// value does not fit in `u64`.
    pub fn from_start_len(start: u64, length: u64, unit: impl Into<Unit>) -> DomainResult<Self> {
        if length == 0 {
            return Err(DomainError::EmptyRange { start });
        }
        let max = start
            .checked_add(length - 1)
            .ok_or(DomainError::SeedRangeOverflow { start, length })?;
        Self::from_bounds(start, max, unit)
    }

    /// Range holding exactly one value.
    pub fn single(measurement: Measurement) -> Self {
        Self { max: measurement.clone(), min: measurement }
    }

    #[inline]
    pub const fn min(&self) -> &Measurement {
        &self.min
    }

    #[inline]
    pub const fn max(&self) -> &Measurement {
        &self.max
    }

    #[inline]
    pub const fn unit(&self) -> &Unit {
        self.min.unit()
    }

    #[inline]
    pub const fn start(&self) -> u64 {
        self.min.value()
    }

    #[inline]
    pub const fn end(&self) -> u64 {
        self.max.value()
    }

    /// Number of values covered. Saturates for the full `u64` domain.
    #[inline]
    pub const fn len(&self) -> u64 {
        (self.end() - self.start()).saturating_add(1)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub const fn contains(&self, value: u64) -> bool {
        self.start() <= value && value <= self.end()
    }

    /// Iterates every value in the range.
    pub fn values(&self) -> RangeInclusive<u64> {
        self.start()..=self.end()
    }
}

impl fmt::Display for MeasurementRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.unit(), self.start(), self.end())
    }
}
