use almanac_domain::{Almanac, SeedLayout};
use almanac_ports::AlmanacLoader;
use almanac_shared_kernel::{ErrorContext, Measurement, Result};
use serde::{Deserialize, Serialize};

use crate::{
    dto::{Located, SolveOutput, StageSummary},
    reducer::{Parallelism, RangeReducer, Reduction, point_minimum},
};

/// What to compute once an almanac is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvePlan {
    pub layout: SeedLayout,
    pub parallelism: Parallelism,
    /// Reject stages whose rules overlap instead of letting the first rule win.
    pub strict: bool,
    /// First-unit value to trace through every stage.
    pub trace: Option<u64>,
    /// Final-unit value to map back to the first unit.
    pub locate: Option<u64>,
}

pub struct SolveAlmanac<'a> {
    loader: &'a dyn AlmanacLoader,
}

impl<'a> SolveAlmanac<'a> {
    pub fn new(loader: &'a dyn AlmanacLoader) -> Self {
        Self { loader }
    }

    /// # Errors
    ///
    /// Loader failures (with the source name as context) and anything
    /// [`SolveAlmanac::solve`] reports.
    pub fn run(&self, plan: &SolvePlan) -> Result<SolveOutput> {
        let source = self.loader.describe();
        let almanac = self.loader.load().with_context(|| format!("loading {source}"))?;
        log::info!(
            "loaded {source}: {} seed number(s), {} stage(s)",
            almanac.seeds().len(),
            almanac.chain().len()
        );
        let mut output = Self::solve(&almanac, plan)?;
        output.source = source;
        Ok(output)
    }

    /// Solves an already loaded almanac.
    ///
    /// # Errors
    ///
    /// `OverlappingRules` under `strict`, seed layout errors, `NoInputRanges`
    /// when the layout yields no seeds, and chain errors.
    pub fn solve(almanac: &Almanac, plan: &SolvePlan) -> Result<SolveOutput> {
        let chain = almanac.chain();
        if plan.strict {
            chain.validate_disjoint().context("strict rule check")?;
        }

        let reduction = match plan.layout {
            SeedLayout::Points => {
                let points = almanac.seed_points();
                let minimum = point_minimum(chain, &points)?;
                Reduction {
                    minimum,
                    input_ranges: points.len(),
                    output_ranges: points.len(),
                    input_values: points.len() as u64,
                }
            }
            SeedLayout::Ranges => {
                let ranges = almanac.seed_ranges(plan.layout)?;
                RangeReducer::new(chain)
                    .with_parallelism(plan.parallelism)
                    .reduce(&ranges)?
            }
        };
        log::info!("minimum {}", reduction.minimum);

        let trace = plan
            .trace
            .map(|value| chain.trace(&Measurement::new(value, almanac.seed_unit().clone())))
            .transpose()?;

        let located = plan
            .locate
            .map(|value| {
                let from = Measurement::new(value, chain.destination().clone());
                chain.apply_reverse(&from).map(|to| Located { from, to })
            })
            .transpose()?;

        Ok(SolveOutput {
            source: String::new(),
            layout: plan.layout,
            stages: chain.stages().iter().map(StageSummary::from).collect(),
            reduction,
            trace,
            located,
        })
    }
}
