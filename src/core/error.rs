//! Error types for data loading.

use thiserror::Error;

/// Errors that can occur when loading monster or weapon definitions.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File or directory could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The file parsed but holds a value the game cannot use.
    #[error("Invalid definition in '{path}': {field} {details}")]
    InvalidDefinition {
        path: String,
        field: &'static str,
        details: String,
    },
}
