use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for shipping-route operations
#[derive(Debug, Error)]
pub enum ShippingError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for ShippingError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ShippingError::NotFound("Record not found".to_string()),
            _ => ShippingError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for shipping-route operations
pub type Result<T> = std::result::Result<T, ShippingError>;
