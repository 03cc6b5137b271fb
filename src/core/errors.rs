use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {code} - {message}")]
    ApiError { code: u16, message: String },

    #[error("RPC error: {message}")]
    RpcError { code: Option<i64>, message: String },

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Sign error: {0}")]
    SigningError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid node response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl SdkError {
    /// Server-supplied message for `RpcError`, if this is one
    pub fn rpc_message(&self) -> Option<&str> {
        match self {
            Self::RpcError { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Server-supplied JSON-RPC error code, when the error object had one
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::RpcError { code, .. } => *code,
            _ => None,
        }
    }
}

/// Chained accessors over an operation result.
///
/// `on_success` runs only for `Ok`, `on_error` only for `Err`; both hand the
/// result back so the two can be chained in either order.
pub trait ResponseExt<T> {
    fn on_success<F: FnOnce(&T)>(self, callback: F) -> Self;
    fn on_error<F: FnOnce(&SdkError)>(self, callback: F) -> Self;
}

impl<T> ResponseExt<T> for Result<T, SdkError> {
    fn on_success<F: FnOnce(&T)>(self, callback: F) -> Self {
        if let Ok(value) = &self {
            callback(value);
        }
        self
    }

    fn on_error<F: FnOnce(&SdkError)>(self, callback: F) -> Self {
        if let Err(err) = &self {
            callback(err);
        }
        self
    }
}
