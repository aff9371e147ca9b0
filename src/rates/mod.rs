// Module declarations
pub(crate) mod rates_errors;
pub(crate) mod rates_model;
pub(crate) mod rates_repository;
pub(crate) mod rates_service;

// Re-export the public interface
pub use rates_model::{NewRate, Rate, RateDB};
pub use rates_repository::RateRepository;
pub use rates_service::RateService;

// Re-export error types for convenience
pub use rates_errors::{RateError, Result};
