use logscope_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unsupported logging backend: {0}")]
    UnsupportedBackend(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, LogscopeError>;
