use almanac_domain::MappingChain;
use almanac_shared_kernel::{ApplicationError, Measurement, MeasurementRange, Result};
use serde::{Deserialize, Serialize};

/// How the reducer spreads independent input ranges over threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parallelism {
    #[default]
    Sequential,
    /// Dedicated rayon pool with this many workers. Runs sequentially when
    /// the `parallel` feature is off.
    Threads(usize),
}

/// Result of pushing a set of ranges through a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// Lowest value reached, in the chain's final unit.
    pub minimum: Measurement,
    pub input_ranges: usize,
    /// Sub-ranges left after every stage has split its input.
    pub output_ranges: usize,
    /// Values covered by the input, saturating at `u64::MAX`.
    pub input_values: u64,
}

#[derive(Debug, Clone, Copy)]
struct Partial {
    minimum: u64,
    pieces: usize,
}

impl Partial {
    const EMPTY: Self = Self { minimum: u64::MAX, pieces: 0 };

    fn merge(self, other: Self) -> Self {
        Self {
            minimum: self.minimum.min(other.minimum),
            pieces: self.pieces + other.pieces,
        }
    }
}

/// Finds the lowest final value over whole ranges of inputs without visiting
/// individual values. Work per range is bounded by the number of rules it
/// crosses, not by its length.
pub struct RangeReducer<'a> {
    chain: &'a MappingChain,
    parallelism: Parallelism,
}

impl<'a> RangeReducer<'a> {
    pub fn new(chain: &'a MappingChain) -> Self {
        Self { chain, parallelism: Parallelism::Sequential }
    }

    #[must_use]
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Lowest value in the chain's final unit over every input range.
    ///
    /// # Errors
    ///
    /// `NoInputRanges` for an empty slice; domain errors when a range is not
    /// in the chain's first unit.
    pub fn minimum_location(&self, ranges: &[MeasurementRange]) -> Result<u64> {
        self.reduce(ranges).map(|reduction| reduction.minimum.value())
    }

    /// # Errors
    ///
    /// As for [`RangeReducer::minimum_location`], plus `ThreadPoolCreation`
    /// when a worker pool cannot be started.
    pub fn reduce(&self, ranges: &[MeasurementRange]) -> Result<Reduction> {
        if ranges.is_empty() {
            return Err(ApplicationError::NoInputRanges.into());
        }

        let partial = match self.parallelism {
            Parallelism::Sequential => self.reduce_sequential(ranges)?,
            Parallelism::Threads(threads) => self.reduce_threaded(ranges, threads)?,
        };

        let input_values = ranges
            .iter()
            .fold(0u64, |acc, range| acc.saturating_add(range.len()));
        log::debug!(
            "reduced {} range(s) covering {input_values} value(s) into {} sub-range(s)",
            ranges.len(),
            partial.pieces
        );

        Ok(Reduction {
            minimum: Measurement::new(partial.minimum, self.chain.destination().clone()),
            input_ranges: ranges.len(),
            output_ranges: partial.pieces,
            input_values,
        })
    }

    fn reduce_one(&self, range: &MeasurementRange) -> Result<Partial> {
        let pieces = self.chain.apply_range(range)?;
        let minimum = pieces
            .iter()
            .map(MeasurementRange::start)
            .fold(u64::MAX, u64::min);
        log::trace!("{range}: {} sub-range(s), minimum {minimum}", pieces.len());
        Ok(Partial { minimum, pieces: pieces.len() })
    }

    fn reduce_sequential(&self, ranges: &[MeasurementRange]) -> Result<Partial> {
        ranges
            .iter()
            .try_fold(Partial::EMPTY, |acc, range| -> Result<Partial> {
                Ok(acc.merge(self.reduce_one(range)?))
            })
    }

    #[cfg(feature = "parallel")]
    fn reduce_threaded(&self, ranges: &[MeasurementRange], threads: usize) -> Result<Partial> {
        use almanac_shared_kernel::InfrastructureError;
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        log::debug!("reducing on {} worker thread(s)", pool.current_num_threads());
        pool.install(|| {
            ranges
                .par_iter()
                .map(|range| self.reduce_one(range))
                .try_reduce(|| Partial::EMPTY, |a, b| Ok(a.merge(b)))
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn reduce_threaded(&self, ranges: &[MeasurementRange], threads: usize) -> Result<Partial> {
        log::debug!("built without `parallel`; ignoring {threads} thread(s)");
        self.reduce_sequential(ranges)
    }
}

/// Lowest final value by running every single input value through the chain.
///
/// Linear in the number of values; only meant as a reference for small inputs.
///
/// # Errors
///
/// `NoInputRanges` for an empty slice, domain errors from the chain.
pub fn scan_minimum(chain: &MappingChain, ranges: &[MeasurementRange]) -> Result<u64> {
    if ranges.is_empty() {
        return Err(ApplicationError::NoInputRanges.into());
    }
    let mut minimum = u64::MAX;
    for range in ranges {
        for value in range.values() {
            let location = chain.apply(&range.min().with_value(value))?;
            minimum = minimum.min(location.value());
        }
    }
    Ok(minimum)
}

/// Lowest final measurement over individual seeds.
///
/// # Errors
///
/// `NoInputRanges` when `seeds` is empty, domain errors from the chain.
pub fn point_minimum(chain: &MappingChain, seeds: &[Measurement]) -> Result<Measurement> {
    let mut best: Option<Measurement> = None;
    for seed in seeds {
        let location = chain.apply(seed)?;
        if best.as_ref().is_none_or(|b| location.value() < b.value()) {
            best = Some(location);
        }
    }
    best.ok_or_else(|| ApplicationError::NoInputRanges.into())
}
