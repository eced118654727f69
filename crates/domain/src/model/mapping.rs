use almanac_shared_kernel::{DomainError, DomainResult, Measurement, MeasurementRange, Unit};
use serde::Serialize;

use super::mapping_range::{Direction, MappingRange};

/// One stage of the almanac, e.g. `seed-to-soil`.
///
/// Rules are consulted in order and the first one covering a value wins.
/// Values no rule covers keep their number and only change unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    source: Unit,
    destination: Unit,
    ranges: Vec<MappingRange>,
}

impl Mapping {
    pub fn new(
        source: impl Into<Unit>,
        destination: impl Into<Unit>,
        ranges: Vec<MappingRange>,
    ) -> Self {
        Self { source: source.into(), destination: destination.into(), ranges }
    }

    #[inline]
    pub const fn source(&self) -> &Unit {
        &self.source
    }

    #[inline]
    pub const fn destination(&self) -> &Unit {
        &self.destination
    }

    #[inline]
    pub fn ranges(&self) -> &[MappingRange] {
        &self.ranges
    }

    /// `(from, to)` units for a lookup in `direction`.
    #[inline]
    pub const fn units(&self, direction: Direction) -> (&Unit, &Unit) {
        match direction {
            Direction::Forward => (&self.source, &self.destination),
            Direction::Reverse => (&self.destination, &self.source),
        }
    }

    /// First rule covering `value` when read in `direction`.
    pub fn find_rule(&self, value: u64, direction: Direction) -> Option<&MappingRange> {
        self.ranges.iter().find(|rule| rule.covers(value, direction))
    }

    /// Raw numeric lookup with identity fallback.
    pub fn lookup(&self, value: u64, direction: Direction) -> u64 {
        self.find_rule(value, direction)
            .map_or(value, |rule| rule.shift(value, direction))
    }

    fn expect_unit(&self, unit: &Unit, direction: Direction) -> DomainResult<()> {
        let (from, _) = self.units(direction);
        if unit != from {
            return Err(DomainError::UnitMismatch { expected: from.clone(), found: unit.clone() });
        }
        Ok(())
    }

    /// Translates a measurement in `direction`.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` when the measurement is not expressed in the unit this
    /// direction starts from.
    pub fn translate_in(&self, measurement: &Measurement, direction: Direction) -> DomainResult<Measurement> {
        self.expect_unit(measurement.unit(), direction)?;
        let (_, to) = self.units(direction);
        Ok(Measurement::new(self.lookup(measurement.value(), direction), to.clone()))
    }

    /// Source unit to destination unit.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` unless `measurement` is in the source unit.
    pub fn translate(&self, measurement: &Measurement) -> DomainResult<Measurement> {
        self.translate_in(measurement, Direction::Forward)
    }

    /// Destination unit back to source unit.
    ///
    /// Only the exact inverse of [`Mapping::translate`] when the rules are
    /// bijective, which the almanac format assumes but does not enforce.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` unless `measurement` is in the destination unit.
    pub fn reverse_translate(&self, measurement: &Measurement) -> DomainResult<Measurement> {
        self.translate_in(measurement, Direction::Reverse)
    }

    /// Translates a whole interval, splitting it wherever a rule starts or ends.
    ///
    /// Each rule in turn claims the parts of the interval it covers; whatever
    /// no rule claimed passes through unchanged. The result is sorted by start
    /// and its sub-ranges together cover exactly as many values as the input.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` when the range is not in the unit `direction` starts from.
    pub fn translate_range_in(
        &self,
        range: &MeasurementRange,
        direction: Direction,
    ) -> DomainResult<Vec<MeasurementRange>> {
        self.expect_unit(range.unit(), direction)?;
        let (_, to) = self.units(direction);

        let mut pending = vec![(range.start(), range.end())];
        let mut out = Vec::new();

        for rule in &self.ranges {
            if pending.is_empty() {
                break;
            }
            let mut rest = Vec::with_capacity(pending.len() + 1);
            for (lo, hi) in pending {
                let Some((from, until)) = rule.overlap(lo, hi, direction) else {
                    rest.push((lo, hi));
                    continue;
                };
                if lo < from {
                    rest.push((lo, from - 1));
                }
                if until < hi {
                    rest.push((until + 1, hi));
                }
                out.push(MeasurementRange::from_bounds(
                    rule.shift(from, direction),
                    rule.shift(until, direction),
                    to.clone(),
                )?);
            }
            pending = rest;
        }

        for (lo, hi) in pending {
            out.push(MeasurementRange::from_bounds(lo, hi, to.clone())?);
        }
        out.sort_by_key(MeasurementRange::start);
        Ok(out)
    }

    /// # Errors
    ///
    /// See [`Mapping::translate_range_in`].
    pub fn translate_range(&self, range: &MeasurementRange) -> DomainResult<Vec<MeasurementRange>> {
        self.translate_range_in(range, Direction::Forward)
    }

    /// # Errors
    ///
    /// See [`Mapping::translate_range_in`].
    pub fn reverse_translate_range(
        &self,
        range: &MeasurementRange,
    ) -> DomainResult<Vec<MeasurementRange>> {
        self.translate_range_in(range, Direction::Reverse)
    }

    /// Checks that no two rules claim the same source value.
    ///
    /// # Errors
    ///
    /// `OverlappingRules` naming the first offending pair by rule index.
    pub fn validate_disjoint(&self) -> DomainResult<()> {
        let mut order: Vec<usize> = (0..self.ranges.len()).collect();
        order.sort_by_key(|&i| self.ranges[i].source_start());

        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if self.ranges[a].source_overlaps(&self.ranges[b]) {
                return Err(DomainError::OverlappingRules {
                    source_unit: self.source.clone(),
                    destination_unit: self.destination.clone(),
                    first: a.min(b),
                    second: a.max(b),
                });
            }
        }
        Ok(())
    }
}
