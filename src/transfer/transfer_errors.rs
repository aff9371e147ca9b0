use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for bulk transfer operations
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Import aborted at row {row}: {message}")]
    RowFailed { row: usize, message: String },
    #[error("Malformed file: {0}")]
    MalformedFile(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DieselError> for TransferError {
    fn from(err: DieselError) -> Self {
        TransferError::DatabaseError(err.to_string())
    }
}

impl From<csv::Error> for TransferError {
    fn from(err: csv::Error) -> Self {
        TransferError::MalformedFile(err.to_string())
    }
}

/// Result type for bulk transfer operations
pub type Result<T> = std::result::Result<T, TransferError>;
