//! Error types for allocheck

use thiserror::Error;

/// Structural violation in the request sequence
///
/// This is the only input problem reported as an error. Every other bad
/// input (negative amounts, unknown resources, overflow) is an ordinary
/// infeasible verdict.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Request #{index} must be a mapping of resource names to amounts, found {found}")]
    NotAMapping { index: usize, found: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised while reading capacities or requests from disk
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column in row {row}: {column}")]
    MissingColumn { row: usize, column: String },

    #[error("Duplicate entry in row {row}: {key}")]
    DuplicateEntry { row: usize, key: String },

    #[error("File is empty: {0}")]
    Empty(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
