use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::rates::RateError;
use crate::shipping::ShippingError;
use crate::vehicles::VehicleError;

/// Custom error type for final-price operations
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("invalid vehicle price")]
    InvalidVehiclePrice,
    #[error("selection required")]
    SelectionRequired,
    #[error("rate not set")]
    RateNotSet,
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<DieselError> for PricingError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => PricingError::NotFound("Record not found".to_string()),
            _ => PricingError::DatabaseError(err.to_string()),
        }
    }
}

impl From<VehicleError> for PricingError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::NotFound(msg) => PricingError::NotFound(msg),
            other => PricingError::DatabaseError(other.to_string()),
        }
    }
}

impl From<ShippingError> for PricingError {
    fn from(err: ShippingError) -> Self {
        match err {
            ShippingError::NotFound(msg) => PricingError::NotFound(msg),
            other => PricingError::DatabaseError(other.to_string()),
        }
    }
}

impl From<RateError> for PricingError {
    fn from(err: RateError) -> Self {
        PricingError::DatabaseError(err.to_string())
    }
}

/// Result type for final-price operations
pub type Result<T> = std::result::Result<T, PricingError>;
