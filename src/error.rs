//! Unified error hierarchy for TrainStat
//!
//! Provides structured error information for package dispatch, reading
//! validation and package file import, with severity levels that map onto
//! the tracing system.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all TrainStat operations
#[derive(Debug, Error)]
pub enum TrainStatError {
    /// Workout type code not present in the dispatch table
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// Sensor readings rejected while building a workout
    #[error("Invalid readings: {0}")]
    Reading(#[from] ReadingError),

    /// Package file import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning a flat list of readings into a workout
#[derive(Debug, Error, PartialEq)]
pub enum ReadingError {
    /// Wrong number of readings for the workout type
    #[error("{kind} expects {expected} readings, got {actual}")]
    ArgumentCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A reading outside its valid domain
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Package file import errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// File extension not recognised
    #[error("Unsupported package file: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// CSV parsing failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV field that is not a number
    #[error("Line {line}: '{value}' is not a number")]
    Parse { line: u64, value: String },

    /// CSV row without a workout code
    #[error("Line {line}: empty package row")]
    EmptyRow { line: u64 },
}

/// Result type alias for TrainStat operations
pub type Result<T> = std::result::Result<T, TrainStatError>;

impl TrainStatError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainStatError::UnknownWorkoutType { .. } => ErrorSeverity::Error,
            TrainStatError::Reading(_) => ErrorSeverity::Warning,
            TrainStatError::Import(ImportError::UnsupportedFormat { .. }) => ErrorSeverity::Warning,
            TrainStatError::Import(_) => ErrorSeverity::Error,
            TrainStatError::Serialization(_) => ErrorSeverity::Error,
            TrainStatError::Io(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainStatError::UnknownWorkoutType { code } => {
                format!(
                    "Workout type '{}' is not supported. Expected one of: RUN, WLK, SWM.",
                    code
                )
            }
            TrainStatError::Reading(ReadingError::ArgumentCount {
                kind,
                expected,
                actual,
            }) => {
                format!(
                    "A {} package needs {} readings but {} were supplied.",
                    kind, expected, actual
                )
            }
            TrainStatError::Import(ImportError::UnsupportedFormat { path }) => {
                format!(
                    "Could not read packages from {}: use a .csv or .json file.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation
    Error,
    /// Warning caused by bad input
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
