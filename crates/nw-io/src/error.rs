//! Error types for nw-io.

use thiserror::Error;

use nw_core::NwError;

/// Errors that can occur while reading roster input or writing schedules.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("input error: {0}")]
    Input(String),

    #[error("time window: {0}")]
    Window(#[from] NwError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("non-UTF-8 JSON output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
