//! Error types for the Biblius circulation system

use thiserror::Error;

/// Main application error type
///
/// Every failure is terminal for the single operation that produced it;
/// callers report the message and return to the menu loop.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record format error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
