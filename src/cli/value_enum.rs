use almanac_domain::SeedLayout;
use clap::ValueEnum;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliSeedLayout {
    /// 種子番号を1つずつ扱う
    Points,
    /// (開始, 長さ) のペアとして扱う
    Ranges,
}

impl From<CliSeedLayout> for SeedLayout {
    fn from(value: CliSeedLayout) -> Self {
        match value {
            CliSeedLayout::Points => SeedLayout::Points,
            CliSeedLayout::Ranges => SeedLayout::Ranges,
        }
    }
}

impl From<SeedLayout> for CliSeedLayout {
    fn from(value: SeedLayout) -> Self {
        match value {
            SeedLayout::Points => CliSeedLayout::Points,
            SeedLayout::Ranges => CliSeedLayout::Ranges,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

impl From<OutputFormat> for CliOutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Table => CliOutputFormat::Table,
            OutputFormat::Json => CliOutputFormat::Json,
            OutputFormat::Yaml => CliOutputFormat::Yaml,
        }
    }
}
