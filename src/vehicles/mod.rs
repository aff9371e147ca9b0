// Module declarations
pub(crate) mod vehicles_errors;
pub(crate) mod vehicles_model;
pub(crate) mod vehicles_repository;
pub(crate) mod vehicles_service;

// Re-export the public interface
pub use vehicles_model::{NewVehicle, Vehicle, VehicleDB, VehicleUpdate};
pub use vehicles_repository::VehicleRepository;
pub use vehicles_service::VehicleService;

// Re-export error types for convenience
pub use vehicles_errors::{Result, VehicleError};
