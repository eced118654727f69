use almanac_shared_kernel::{DomainError, DomainResult, Measurement, MeasurementRange, Unit};
use serde::Serialize;

use super::chain::MappingChain;
use crate::options::SeedLayout;

/// A parsed almanac: the raw numbers of the `seeds:` line and the chain of
/// stages that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Almanac {
    seeds: Vec<u64>,
    chain: MappingChain,
}

impl Almanac {
    pub fn new(seeds: Vec<u64>, chain: MappingChain) -> Self {
        Self { seeds, chain }
    }

    #[inline]
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    #[inline]
    pub const fn chain(&self) -> &MappingChain {
        &self.chain
    }

    /// Unit the seed numbers are expressed in (the chain's first unit).
    pub fn seed_unit(&self) -> &Unit {
        self.chain.source()
    }

    /// Every seed number as its own measurement.
    pub fn seed_points(&self) -> Vec<Measurement> {
        let unit = self.seed_unit();
        self.seeds.iter().map(|&v| Measurement::new(v, unit.clone())).collect()
    }

    /// Seed numbers as ranges for `layout`.
    ///
    /// Pairs with a zero length describe no seeds and are skipped.
    ///
    /// # Errors
    ///
    /// `UnpairedSeed` for an odd count under [`SeedLayout::Ranges`],
    /// `SeedRangeOverflow` when a pair runs past `u64::MAX`.
    pub fn seed_ranges(&self, layout: SeedLayout) -> DomainResult<Vec<MeasurementRange>> {
        match layout {
            SeedLayout::Points => {
                Ok(self.seed_points().into_iter().map(MeasurementRange::single).collect())
            }
            SeedLayout::Ranges => {
                if self.seeds.len() % 2 != 0 {
                    return Err(DomainError::UnpairedSeed { count: self.seeds.len() });
                }
                let unit = self.seed_unit();
                let mut ranges = Vec::with_capacity(self.seeds.len() / 2);
                for pair in self.seeds.chunks_exact(2) {
                    let (start, length) = (pair[0], pair[1]);
                    if length == 0 {
                        log::warn!("skipping empty seed range starting at {start}");
                        continue;
                    }
                    ranges.push(MeasurementRange::from_start_len(start, length, unit.clone())?);
                }
                Ok(ranges)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mapping, MappingRange};

    fn almanac(seeds: Vec<u64>) -> Almanac {
        let chain = MappingChain::new(vec![Mapping::new(
            "seed",
            "soil",
            vec![MappingRange::new(50, 98, 2).unwrap()],
        )])
        .unwrap();
        Almanac::new(seeds, chain)
    }

    #[test]
    fn points_layout_keeps_every_number() {
        let ranges = almanac(vec![79, 14, 55, 13]).seed_ranges(SeedLayout::Points).unwrap();
        let starts: Vec<u64> = ranges.iter().map(MeasurementRange::start).collect();
        assert_eq!(starts, [79, 14, 55, 13]);
        assert!(ranges.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn ranges_layout_pairs_numbers() {
        let ranges = almanac(vec![79, 14, 55, 13]).seed_ranges(SeedLayout::Ranges).unwrap();
        let bounds: Vec<(u64, u64)> = ranges.iter().map(|r| (r.start(), r.end())).collect();
        assert_eq!(bounds, [(79, 92), (55, 67)]);
        assert!(ranges.iter().all(|r| r.unit() == &Unit::new("seed")));
    }

    #[test]
    fn odd_count_is_rejected() {
        let err = almanac(vec![79, 14, 55]).seed_ranges(SeedLayout::Ranges).unwrap_err();
        assert_eq!(err, DomainError::UnpairedSeed { count: 3 });
    }

    #[test]
    fn zero_length_pairs_are_skipped() {
        let ranges = almanac(vec![5, 0, 10, 2]).seed_ranges(SeedLayout::Ranges).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].start(), 10);
    }
}
