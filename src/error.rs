//! Error types for the Zarinpal client

use thiserror::Error;

/// Result type alias for Zarinpal operations
pub type Result<T> = std::result::Result<T, ZarinpalError>;

/// Main error type for Zarinpal operations
#[derive(Error, Debug)]
pub enum ZarinpalError {
    /// A caller-supplied argument failed a precondition. Raised before any I/O.
    #[error("{message}")]
    Validation { message: String },

    /// The request body could not be encoded
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network-level failure reaching the gateway
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON in the expected shape
    #[error("invalid JSON response")]
    InvalidResponse,

    /// The gateway answered with a status code other than `100`.
    ///
    /// The message is the bare code, e.g. `"-9"`. See [`crate::status::describe`]
    /// for human-readable text.
    #[error("{code}")]
    Gateway { code: i32 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ZarinpalError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a gateway error for a non-success status code
    pub fn gateway(code: i32) -> Self {
        Self::Gateway { code }
    }

    /// The gateway status code carried by this error, if any
    pub fn status_code(&self) -> Option<i32> {
        match self {
            Self::Gateway { code } => Some(*code),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
