// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::Unit;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AlmanacError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, AlmanacError>;

/// Domain-layer specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Unit mismatch: expected '{expected}', found '{found}'")]
    UnitMismatch { expected: Unit, found: Unit },

    #[error("Chain broken at stage {stage}: expected source '{expected}', found '{found}'")]
    ChainBroken {
        stage: usize,
        expected: Unit,
        found: Unit,
    },

    #[error("A mapping chain needs at least one stage")]
    EmptyChain,

    #[error("Mapping rule at source {source_start} has zero length")]
    EmptyRule { source_start: u64 },

    #[error(
        "Mapping rule {destination_start} {source_start} {length} exceeds the representable range"
    )]
    RuleOverflow {
        destination_start: u64,
        source_start: u64,
        length: u64,
    },

    #[error("Range starting at {start} is empty")]
    EmptyRange { start: u64 },

    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: u64, max: u64 },

    #[error(
        "Overlapping rules in {source_unit}-to-{destination_unit}: rule {first} and rule {second}"
    )]
    OverlappingRules {
        source_unit: Unit,
        destination_unit: Unit,
        first: usize,
        second: usize,
    },

    #[error("Seed ranges need (start, length) pairs but {count} values were given")]
    UnpairedSeed { count: usize },

    #[error("Seed range starting at {start} with length {length} exceeds the representable range")]
    SeedRangeOverflow { start: u64, length: u64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No input ranges were given to reduce")]
    NoInputRanges,
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid seed list '{content}'")]
    InvalidSeedList { line: usize, content: String },

    #[error("Line {line}: invalid header '{content}'")]
    InvalidHeader { line: usize, content: String },

    #[error("Line {line}: expected 3 fields but found {fields} in '{content}'")]
    InvalidRangeLine {
        line: usize,
        fields: usize,
        content: String,
    },

    #[error("Line {line}: failed to parse {field} '{value}': {source}")]
    NumberParse {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for AlmanacError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AlmanacError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for AlmanacError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AlmanacError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AlmanacError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AlmanacError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

impl AlmanacError {
    /// Walks through `Context` wrappers to the error that caused them.
    pub fn root(&self) -> &AlmanacError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}
