use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for rate-related operations
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for RateError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RateError::NotFound("Record not found".to_string()),
            _ => RateError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for rate operations
pub type Result<T> = std::result::Result<T, RateError>;
