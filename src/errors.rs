// errors.rs
use thiserror::Error;

/// Failures of the record store and its storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{field} is required")]
    Validation { field: &'static str },
    #[error("conversation {0} not found")]
    NotFound(String),
    #[error("snapshot read failed: {0}")]
    StorageRead(String),
    #[error("snapshot write failed: {0}")]
    StorageWrite(String),
    #[error("row store call failed: {0}")]
    RemoteCall(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::RemoteCall(err.to_string())
    }
}

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (store, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

/// Configuration values that could not be parsed at start-up.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
