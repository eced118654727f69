// tests/integration/end_to_end.rs
use std::path::Path;

use almanac::{
    app,
    cli::{Args, build_config},
};
use almanac_shared_kernel::{AlmanacError, DomainError, InfrastructureError, Measurement, Result};
use almanac_usecase::SolveOutput;
use clap::Parser;

#[path = "../common/mod.rs"]
mod common;
use common::{OVERLAPPING, TempWorkspace};

fn solve(extra: &[&str], file: &Path) -> Result<SolveOutput> {
    let mut argv = vec!["almanac".to_string()];
    argv.extend(extra.iter().map(ToString::to_string));
    argv.push(file.display().to_string());
    let config = build_config(&Args::parse_from(argv))?;
    app::run(&config)
}

#[test]
fn ranges_give_46() {
    let ws = TempWorkspace::new();
    let output = solve(&[], &ws.example()).unwrap();
    assert_eq!(output.reduction.minimum, Measurement::new(46, "location"));
    assert_eq!(output.reduction.input_ranges, 2);
    assert_eq!(output.reduction.input_values, 27);
    assert_eq!(output.stages.len(), 7);
}

#[test]
fn points_give_35() {
    let ws = TempWorkspace::new();
    let output = solve(&["--seeds", "points"], &ws.example()).unwrap();
    assert_eq!(output.reduction.minimum.value(), 35);
    assert_eq!(output.reduction.input_ranges, 4);
}

#[test]
fn sequential_and_threaded_agree() {
    let ws = TempWorkspace::new();
    let file = ws.example();
    let sequential = solve(&["--sequential"], &file).unwrap();
    let threaded = solve(&["-j", "4"], &file).unwrap();
    assert_eq!(sequential.reduction, threaded.reduction);
}

#[test]
fn trace_and_locate() {
    let ws = TempWorkspace::new();
    let output = solve(&["--trace", "79", "--locate", "46"], &ws.example()).unwrap();
    let trace: Vec<u64> = output.trace.unwrap().iter().map(Measurement::value).collect();
    assert_eq!(trace, [79, 81, 81, 81, 74, 78, 78, 82]);
    assert_eq!(output.located.unwrap().to, Measurement::new(82, "seed"));
}

#[test]
fn strict_flag_rejects_overlap() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("overlap.txt", OVERLAPPING);
    assert!(solve(&[], &file).is_ok());

    let err = solve(&["--strict"], &file).unwrap_err();
    assert!(matches!(err.root(), AlmanacError::Domain(DomainError::OverlappingRules { .. })));
}

#[test]
fn parse_errors_surface_with_line_numbers() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("bad.txt", "seeds: 1 2\n\nseed-to-soil map:\n1 2\n");
    let err = solve(&[], &file).unwrap_err();
    assert!(matches!(
        err.root(),
        AlmanacError::Infrastructure(InfrastructureError::InvalidRangeLine { line: 4, fields: 2, .. })
    ));
}

#[test]
fn odd_seed_count_fails_in_range_layout_only() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("odd.txt", "seeds: 1 2 3\n\nseed-to-soil map:\n10 0 5\n");
    let err = solve(&[], &file).unwrap_err();
    assert!(matches!(err.root(), AlmanacError::Domain(DomainError::UnpairedSeed { count: 3 })));

    let output = solve(&["--seeds", "points"], &file).unwrap();
    assert_eq!(output.reduction.minimum.value(), 11);
}
