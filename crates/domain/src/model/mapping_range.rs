use almanac_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

/// Which side of a rule a lookup starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Source value to destination value.
    Forward,
    /// Destination value back to source value.
    Reverse,
}

/// One rule of a mapping: `[source_start, source_start + length)` lands on
/// `[destination_start, destination_start + length)` with a constant offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MappingRange {
    destination_start: u64,
    source_start: u64,
    length: u64,
}

impl MappingRange {
    /// # Errors
    ///
    /// `EmptyRule` for a zero length and `RuleOverflow` when either side of
    /// the rule would run past `u64::MAX`.
    pub fn new(destination_start: u64, source_start: u64, length: u64) -> DomainResult<Self> {
        if length == 0 {
            return Err(DomainError::EmptyRule { source_start });
        }
        let last = length - 1;
        if source_start.checked_add(last).is_none() || destination_start.checked_add(last).is_none()
        {
            return Err(DomainError::RuleOverflow { destination_start, source_start, length });
        }
        Ok(Self { destination_start, source_start, length })
    }

    #[inline]
    pub const fn destination_start(&self) -> u64 {
        self.destination_start
    }

    #[inline]
    pub const fn source_start(&self) -> u64 {
        self.source_start
    }

    #[inline]
    pub const fn length(&self) -> u64 {
        self.length
    }

    /// Last source value covered (inclusive).
    #[inline]
    pub const fn source_end(&self) -> u64 {
        self.source_start + (self.length - 1)
    }

    /// Last destination value covered (inclusive).
    #[inline]
    pub const fn destination_end(&self) -> u64 {
        self.destination_start + (self.length - 1)
    }

    /// `(from_start, from_end, to_start)` as seen from `direction`.
    #[inline]
    const fn span(&self, direction: Direction) -> (u64, u64, u64) {
        match direction {
            Direction::Forward => (self.source_start, self.source_end(), self.destination_start),
            Direction::Reverse => (self.destination_start, self.destination_end(), self.source_start),
        }
    }

    #[inline]
    pub const fn covers(&self, value: u64, direction: Direction) -> bool {
        let (start, end, _) = self.span(direction);
        start <= value && value <= end
    }

    /// Translates `value` when the rule covers it.
    #[inline]
    pub const fn lookup(&self, value: u64, direction: Direction) -> Option<u64> {
        if self.covers(value, direction) {
            Some(self.shift(value, direction))
        } else {
            None
        }
    }

    /// Part of `[lo, hi]` covered by this rule, if any.
    pub fn overlap(&self, lo: u64, hi: u64, direction: Direction) -> Option<(u64, u64)> {
        let (start, end, _) = self.span(direction);
        let from = lo.max(start);
        let to = hi.min(end);
        (from <= to).then_some((from, to))
    }

    /// Applies the offset. `value` must be covered by the rule.
    #[inline]
    pub(crate) const fn shift(&self, value: u64, direction: Direction) -> u64 {
        let (start, _, target) = self.span(direction);
        target + (value - start)
    }

    /// Whether the source sides of two rules share at least one value.
    pub fn source_overlaps(&self, other: &Self) -> bool {
        self.source_start <= other.source_end() && other.source_start <= self.source_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_length() {
        assert_eq!(
            MappingRange::new(50, 98, 0).unwrap_err(),
            DomainError::EmptyRule { source_start: 98 }
        );
    }

    #[test]
    fn rejects_overflowing_rule() {
        let err = MappingRange::new(0, u64::MAX, 2).unwrap_err();
        assert!(matches!(err, DomainError::RuleOverflow { .. }));
        let err = MappingRange::new(u64::MAX - 1, 0, 3).unwrap_err();
        assert!(matches!(err, DomainError::RuleOverflow { .. }));
    }

    #[test]
    fn accepts_rule_ending_at_max() {
        let rule = MappingRange::new(0, u64::MAX, 1).unwrap();
        assert_eq!(rule.source_end(), u64::MAX);
        assert_eq!(rule.lookup(u64::MAX, Direction::Forward), Some(0));
    }

    #[test]
    fn lookup_boundaries_of_length_one_rule() {
        let rule = MappingRange::new(7, 3, 1).unwrap();
        assert_eq!(rule.lookup(3, Direction::Forward), Some(7));
        assert_eq!(rule.lookup(4, Direction::Forward), None);
        assert_eq!(rule.lookup(2, Direction::Forward), None);
        assert_eq!(rule.lookup(7, Direction::Reverse), Some(3));
    }

    #[test]
    fn overlap_clips_to_rule() {
        let rule = MappingRange::new(52, 50, 48).unwrap();
        assert_eq!(rule.overlap(40, 60, Direction::Forward), Some((50, 60)));
        assert_eq!(rule.overlap(90, 120, Direction::Forward), Some((90, 97)));
        assert_eq!(rule.overlap(98, 120, Direction::Forward), None);
        assert_eq!(rule.overlap(40, 51, Direction::Reverse), None);
        assert_eq!(rule.overlap(40, 55, Direction::Reverse), Some((52, 55)));
    }

    #[test]
    fn detects_source_overlap() {
        let a = MappingRange::new(0, 10, 5).unwrap();
        let b = MappingRange::new(100, 14, 2).unwrap();
        let c = MappingRange::new(200, 15, 2).unwrap();
        assert!(a.source_overlaps(&b));
        assert!(!a.source_overlaps(&c));
    }
}
