//! Error types for gameplay data loading.

use thiserror::Error;

/// Errors that can occur when loading the gameplay config.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A numeric setting is not finite or falls outside its allowed range.
    #[error("Invalid value: {field} ({value}) must be {expected}")]
    InvalidValue {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A pair of ranges that must be ordered is not.
    #[error("Invalid range: {field} ({value}) must be below {limit_field} ({limit})")]
    InvalidRange {
        field: &'static str,
        value: f32,
        limit_field: &'static str,
        limit: f32,
    },
}
