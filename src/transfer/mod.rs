// Module declarations
pub(crate) mod transfer_errors;
pub(crate) mod transfer_model;
pub(crate) mod transfer_service;

// Re-export the public interface
pub use transfer_model::{ImportOptions, ImportSummary, NumericPolicy, RowPolicy, TransferTable};
pub use transfer_service::TransferService;

// Re-export error types for convenience
pub use transfer_errors::{Result, TransferError};
