use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    // Local, pre-network failures. Message is user-facing as-is.
    #[error("{message}")]
    ValidationError { message: String },

    // Remote failures with a `detail` payload from the service.
    #[error("{message}")]
    ServiceError { message: String },

    #[error("Clipboard unavailable: {message}")]
    ClipboardError { message: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
