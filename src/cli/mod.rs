mod args;
mod value_enum;

pub use args::Args;
use almanac_shared_kernel::{PresentationError, Result};
use almanac_usecase::Parallelism;
use clap::Parser;
pub use value_enum::{CliOutputFormat, CliSeedLayout};

use crate::config::{Config, ConfigBuilder, InputSource};

const MAX_JOBS: usize = 512;

fn validate_jobs(flag: &str, jobs: Option<usize>) -> Result<()> {
    match jobs {
        Some(j) if j == 0 || j > MAX_JOBS => Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: j.to_string(),
            reason: format!("must be between 1 and {MAX_JOBS}"),
        }
        .into()),
        _ => Ok(()),
    }
}

fn parallelism(args: &Args) -> Parallelism {
    if args.sequential {
        Parallelism::Sequential
    } else {
        Parallelism::Threads(args.jobs.unwrap_or_else(num_cpus::get))
    }
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// See [`build_config`].
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when `--jobs` is outside `1..=512`.
pub fn build_config(args: &Args) -> Result<Config> {
    validate_jobs("--jobs", args.jobs)?;

    ConfigBuilder::default()
        .input(InputSource::from(args.input.clone()))
        .layout(args.seeds)
        .format(args.format)
        .parallelism(parallelism(args))
        .strict(args.strict)
        .trace(args.trace)
        .locate(args.locate)
        .verbosity(args.verbose)
        .build()
        .map_err(|e| {
            PresentationError::InvalidValue {
                flag: "<INPUT>".to_string(),
                value: args.input.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use almanac_domain::SeedLayout;
    use almanac_shared_kernel::AlmanacError;

    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["almanac", "input.txt"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.input, InputSource::Path(PathBuf::from("input.txt")));
        assert_eq!(config.layout, SeedLayout::Ranges);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.parallelism, Parallelism::Threads(num_cpus::get()));
        assert!(!config.strict);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn dash_reads_stdin() {
        let args = Args::parse_from(["almanac", "-"]);
        assert_eq!(build_config(&args).unwrap().input, InputSource::Stdin);
    }

    #[test]
    fn sequential_disables_threads() {
        let args = Args::parse_from(["almanac", "--sequential", "x"]);
        assert_eq!(build_config(&args).unwrap().parallelism, Parallelism::Sequential);
    }

    #[test]
    fn sequential_conflicts_with_jobs() {
        assert!(Args::try_parse_from(["almanac", "--sequential", "-j", "2", "x"]).is_err());
    }

    #[test]
    fn options_are_carried_over() {
        let args = Args::parse_from([
            "almanac", "--seeds", "points", "--format", "json", "-j", "3", "--strict", "--trace",
            "79", "--locate", "46", "-vv", "x",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.layout, SeedLayout::Points);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.parallelism, Parallelism::Threads(3));
        assert!(config.strict);
        assert_eq!(config.trace, Some(79));
        assert_eq!(config.locate, Some(46));
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn validate_jobs_rejects_out_of_range() {
        for jobs in [0, 600] {
            let err = validate_jobs("--jobs", Some(jobs)).unwrap_err();
            if let AlmanacError::Presentation(PresentationError::InvalidValue { flag, value, .. }) = err {
                assert_eq!(flag, "--jobs");
                assert_eq!(value, jobs.to_string());
            } else {
                panic!("unexpected error variant: {err:?}");
            }
        }
        assert!(validate_jobs("--jobs", Some(8)).is_ok());
        assert!(validate_jobs("--jobs", None).is_ok());
    }
}
