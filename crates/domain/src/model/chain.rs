use almanac_shared_kernel::{DomainError, DomainResult, Measurement, MeasurementRange, Unit};
use serde::Serialize;

use super::{mapping::Mapping, mapping_range::Direction};

/// Stages linked end to end, `seed -> soil -> ... -> location`.
///
/// Linkage is validated on construction and checked again while applying,
/// since the stages usually come straight from parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingChain {
    stages: Vec<Mapping>,
}

impl MappingChain {
    /// # Errors
    ///
    /// `EmptyChain` without stages, `ChainBroken` when a stage does not start
    /// where the previous one ended.
    pub fn new(stages: Vec<Mapping>) -> DomainResult<Self> {
        if stages.is_empty() {
            return Err(DomainError::EmptyChain);
        }
        for (index, pair) in stages.windows(2).enumerate() {
            if pair[0].destination() != pair[1].source() {
                return Err(DomainError::ChainBroken {
                    stage: index + 1,
                    expected: pair[0].destination().clone(),
                    found: pair[1].source().clone(),
                });
            }
        }
        Ok(Self { stages })
    }

    /// Orders `mappings` by following units from `start`.
    ///
    /// # Errors
    ///
    /// `ChainBroken` when no mapping continues from the current unit while
    /// some are still unused, `EmptyChain` for no mappings.
    pub fn link(mappings: Vec<Mapping>, start: impl Into<Unit>) -> DomainResult<Self> {
        let mut remaining = mappings;
        let mut current = start.into();
        let mut stages = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let Some(pos) = remaining.iter().position(|m| m.source() == &current) else {
                return Err(DomainError::ChainBroken {
                    stage: stages.len(),
                    expected: current,
                    found: remaining[0].source().clone(),
                });
            };
            let stage = remaining.remove(pos);
            current = stage.destination().clone();
            stages.push(stage);
        }
        Self::new(stages)
    }

    #[inline]
    pub fn stages(&self) -> &[Mapping] {
        &self.stages
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Unit the chain starts from.
    pub fn source(&self) -> &Unit {
        self.stages[0].source()
    }

    /// Unit the chain ends in.
    pub fn destination(&self) -> &Unit {
        self.stages[self.stages.len() - 1].destination()
    }

    /// Every unit along the chain, first to last.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        std::iter::once(self.source()).chain(self.stages.iter().map(Mapping::destination))
    }

    /// The first stage reports a foreign unit as a caller error; later
    /// stages report a broken chain.
    fn check_stage(&self, index: usize, unit: &Unit, direction: Direction) -> DomainResult<()> {
        let (expected, _) = self.stages[index].units(direction);
        if unit == expected {
            return Ok(());
        }
        let is_entry = match direction {
            Direction::Forward => index == 0,
            Direction::Reverse => index + 1 == self.stages.len(),
        };
        if is_entry {
            Err(DomainError::UnitMismatch { expected: expected.clone(), found: unit.clone() })
        } else {
            Err(DomainError::ChainBroken {
                stage: index,
                expected: expected.clone(),
                found: unit.clone(),
            })
        }
    }

    fn stage_order(&self, direction: Direction) -> Box<dyn Iterator<Item = usize> + '_> {
        match direction {
            Direction::Forward => Box::new(0..self.stages.len()),
            Direction::Reverse => Box::new((0..self.stages.len()).rev()),
        }
    }

    fn walk(&self, measurement: &Measurement, direction: Direction) -> DomainResult<Vec<Measurement>> {
        let mut path = Vec::with_capacity(self.stages.len() + 1);
        path.push(measurement.clone());
        for index in self.stage_order(direction) {
            let current = &path[path.len() - 1];
            self.check_stage(index, current.unit(), direction)?;
            let next = self.stages[index].translate_in(current, direction)?;
            path.push(next);
        }
        Ok(path)
    }

    fn last_of(mut path: Vec<Measurement>) -> DomainResult<Measurement> {
        path.pop().ok_or(DomainError::EmptyChain)
    }

    /// Feeds `measurement` through every stage in order.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` when the input is not in [`MappingChain::source`],
    /// `ChainBroken` when an intermediate unit does not fit the next stage.
    pub fn apply(&self, measurement: &Measurement) -> DomainResult<Measurement> {
        self.walk(measurement, Direction::Forward).and_then(Self::last_of)
    }

    /// Feeds a final-unit measurement back through every stage, last first.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` when the input is not in [`MappingChain::destination`],
    /// `ChainBroken` as for [`MappingChain::apply`].
    pub fn apply_reverse(&self, measurement: &Measurement) -> DomainResult<Measurement> {
        self.walk(measurement, Direction::Reverse).and_then(Self::last_of)
    }

    /// Every intermediate measurement, starting with the input.
    ///
    /// # Errors
    ///
    /// As for [`MappingChain::apply`].
    pub fn trace(&self, measurement: &Measurement) -> DomainResult<Vec<Measurement>> {
        self.walk(measurement, Direction::Forward)
    }

    /// Pushes one range through every stage, splitting it at rule boundaries.
    ///
    /// # Errors
    ///
    /// As for [`MappingChain::apply`].
    pub fn apply_range(&self, range: &MeasurementRange) -> DomainResult<Vec<MeasurementRange>> {
        self.apply_ranges(vec![range.clone()])
    }

    /// Stage by stage, the output set of one stage is the input set of the next.
    ///
    /// # Errors
    ///
    /// As for [`MappingChain::apply`].
    pub fn apply_ranges(&self, ranges: Vec<MeasurementRange>) -> DomainResult<Vec<MeasurementRange>> {
        let mut current = ranges;
        for (index, stage) in self.stages.iter().enumerate() {
            let mut next = Vec::with_capacity(current.len());
            for range in &current {
                self.check_stage(index, range.unit(), Direction::Forward)?;
                next.extend(stage.translate_range(range)?);
            }
            log::trace!(
                "{}-to-{}: {} range(s) in, {} out",
                stage.source(),
                stage.destination(),
                current.len(),
                next.len()
            );
            current = next;
        }
        Ok(current)
    }

    /// Runs [`Mapping::validate_disjoint`] on every stage.
    ///
    /// # Errors
    ///
    /// The first `OverlappingRules` found.
    pub fn validate_disjoint(&self) -> DomainResult<()> {
        self.stages.iter().try_for_each(Mapping::validate_disjoint)
    }
}
