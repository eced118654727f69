// src/presentation.rs
use std::fmt::Write;

use almanac_shared_kernel::Result;
use almanac_usecase::SolveOutput;

use crate::config::{Config, OutputFormat};

/// Renders `output` in the configured format.
///
/// # Errors
///
/// Serialization failures for JSON and YAML.
pub fn render(output: &SolveOutput, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(output)?),
        OutputFormat::Table => Ok(render_table(output, config)),
    }
}

/// # Errors
///
/// See [`render`].
pub fn print_output(output: &SolveOutput, config: &Config) -> Result<()> {
    print!("{}", render(output, config)?);
    Ok(())
}

fn render_table(output: &SolveOutput, config: &Config) -> String {
    let mut out = String::new();
    let reduction = &output.reduction;

    let _ = writeln!(
        out,
        "almanac v{} · seeds={} · input={}",
        crate::VERSION,
        output.layout,
        output.source
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "    RULES     STAGE");
    let _ = writeln!(out, "----------------------------------------------");
    for stage in &output.stages {
        let _ = writeln!(out, "{:>9}     {} -> {}", stage.rules, stage.source, stage.destination);
    }
    let _ = writeln!(out, "---");
    let _ = writeln!(
        out,
        "{:>9}     values in {} range(s) -> {} sub-range(s)",
        reduction.input_values, reduction.input_ranges, reduction.output_ranges
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "minimum {}: {}",
        reduction.minimum.unit(),
        reduction.minimum.value()
    );

    if let Some(trace) = &output.trace {
        let path: Vec<String> = trace.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "trace: {}", path.join(" -> "));
    }
    if let Some(located) = &output.located {
        let _ = writeln!(out, "locate: {} <- {}", located.from, located.to);
    }
    if config.verbosity > 0 {
        let _ = writeln!(out, "[almanac] parallelism: {:?}", config.parallelism);
    }
    out
}
