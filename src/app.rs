// src/app.rs
use almanac_infra::{TextAlmanacLoader, persistence::FileReader};
use almanac_shared_kernel::Result;
use almanac_usecase::{SolveAlmanac, SolveOutput};

use crate::config::{Config, InputSource};

fn loader(input: &InputSource) -> Result<TextAlmanacLoader> {
    match input {
        InputSource::Path(path) => Ok(TextAlmanacLoader::from_path(path)),
        InputSource::Stdin => {
            let text = FileReader::read_stdin_from(std::io::stdin().lock())?;
            Ok(TextAlmanacLoader::from_text(input.to_string(), text))
        }
    }
}

/// Loads the configured input and solves it.
///
/// # Errors
///
/// Anything loading, parsing or solving the almanac reports.
pub fn run(config: &Config) -> Result<SolveOutput> {
    tracing::debug!(input = %config.input, parallelism = ?config.parallelism, "starting");
    let loader = loader(&config.input)?;
    SolveAlmanac::new(&loader).run(&config.plan())
}
