// src/error/types.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    /// Boundary-level rejection carrying one message per offending field.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A store failure translated by the service layer. The original error
    /// detail is logged at the translation site, not carried here verbatim.
    #[error("Exception occurred during {operation}: {message}")]
    Persistence {
        operation: &'static str,
        message: String,
    },

    #[error("Other error: {0}")]
    Other(String),
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
