//! Error types for rolegate
//!
//! The evaluator itself never fails; errors only arise while loading or
//! validating a role table, and at the role normalization boundary.

use thiserror::Error;

/// The main error type for rolegate operations
#[derive(Debug, Error)]
pub enum AccessError {
    /// Role table failed validation
    #[error("invalid role table: {0}")]
    InvalidTable(String),

    /// A role string that names no known role
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Role table config could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Role table config could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for rolegate operations
pub type Result<T> = std::result::Result<T, AccessError>;
