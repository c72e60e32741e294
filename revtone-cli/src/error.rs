//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// A review was empty or whitespace only
    NoReview(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Patterns resolved to no files
    NoFilesMatched(Vec<String>),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoReview(source) => write!(f, "No review provided ({source})"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoFilesMatched(patterns) => write!(
                f,
                "No files found matching the provided patterns: {}",
                patterns.join(", ")
            ),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
