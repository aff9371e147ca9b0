// Module declarations
pub(crate) mod shipping_errors;
pub(crate) mod shipping_model;
pub(crate) mod shipping_repository;
pub(crate) mod shipping_service;

// Re-export the public interface
pub use shipping_model::{NewShippingRoute, ShippingRoute, ShippingRouteDB, ShippingRouteUpdate};
pub use shipping_repository::ShippingRouteRepository;
pub use shipping_service::ShippingService;

// Re-export error types for convenience
pub use shipping_errors::{Result, ShippingError};
