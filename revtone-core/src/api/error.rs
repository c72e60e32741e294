//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lexicon could not be loaded or failed validation
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// Error from the scoring domain
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
