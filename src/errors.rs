use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::pricing::PricingError;
use crate::rates::RateError;
use crate::shipping::ShippingError;
use crate::transfer::TransferError;
use crate::vehicles::VehicleError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the import-cost tracker
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate error: {0}")]
    Rate(#[from] RateError),

    #[error("Vehicle error: {0}")]
    Vehicle(#[from] VehicleError),

    #[error("Shipping route error: {0}")]
    Shipping(#[from] ShippingError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(#[from] diesel::result::ConnectionError),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(#[from] r2d2::Error),

    #[error("Database query failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Database file operation failed: {0}")]
    FileOperationFailed(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Implement From for DieselError to Error directly
impl From<DieselError> for Error {
    fn from(err: DieselError) -> Self {
        Error::Database(DatabaseError::QueryFailed(err))
    }
}

impl From<r2d2::Error> for Error {
    fn from(e: r2d2::Error) -> Self {
        Error::Database(DatabaseError::PoolCreationFailed(e))
    }
}

// Database files live on disk, so IO failures are storage failures
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Database(DatabaseError::FileOperationFailed(err.to_string()))
    }
}
