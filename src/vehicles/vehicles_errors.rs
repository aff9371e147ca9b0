use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for vehicle-catalog operations
#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for VehicleError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => VehicleError::NotFound("Record not found".to_string()),
            _ => VehicleError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for vehicle operations
pub type Result<T> = std::result::Result<T, VehicleError>;
