// crates/shared-kernel/src/value_objects/measurement.rs
use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Name of the unit a value belongs to, e.g. `seed` or `location`.
///
/// Cloning is cheap; units are copied into every translated measurement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(Arc<str>);

impl Unit {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Unit {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Unit {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// A value tagged with the unit it is expressed in.
///
/// Measurements are never mutated; translating one yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurement {
    value: u64,
    unit: Unit,
}

impl Measurement {
    #[inline]
    pub fn new(value: u64, unit: impl Into<Unit>) -> Self {
        Self { value, unit: unit.into() }
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Same unit, different value.
    #[inline]
    pub fn with_value(&self, value: u64) -> Self {
        Self { value, unit: self.unit.clone() }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.unit, self.value)
    }
}
