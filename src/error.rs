use thiserror::Error;

/// Failure decoding or storing settings/statistics
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable")]
    Unavailable,

    #[error("Value out of range: {field} = {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
