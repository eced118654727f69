// src/config.rs
use std::{fmt, path::PathBuf};

use almanac_domain::SeedLayout;
use almanac_usecase::{Parallelism, SolvePlan};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Where the almanac text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" { Self::Stdin } else { Self::Path(path) }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub input: InputSource,
    #[builder(default)]
    pub layout: SeedLayout,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub parallelism: Parallelism,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub trace: Option<u64>,
    #[builder(default)]
    pub locate: Option<u64>,
    #[builder(default)]
    pub verbosity: u8,
}

impl Config {
    pub fn plan(&self) -> SolvePlan {
        SolvePlan {
            layout: self.layout,
            parallelism: self.parallelism,
            strict: self.strict,
            trace: self.trace,
            locate: self.locate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_input() {
        assert!(ConfigBuilder::default().build().is_err());
    }

    #[test]
    fn builder_defaults() {
        let config = ConfigBuilder::default()
            .input(InputSource::Stdin)
            .build()
            .unwrap();
        assert_eq!(config.layout, SeedLayout::Ranges);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.plan(), SolvePlan::default());
    }

    #[test]
    fn input_source_display() {
        assert_eq!(InputSource::from(PathBuf::from("-")).to_string(), "<stdin>");
        assert_eq!(InputSource::from(PathBuf::from("a.txt")).to_string(), "a.txt");
    }
}
