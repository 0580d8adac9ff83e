//! Error types for registry listing and report generation

pub mod handlers;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HartisizeError>;

#[derive(Debug, Error)]
pub enum HartisizeError {
    /// Malformed host URL or environment value, raised before any work starts
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any failed call to the registry API
    #[error("Registry error during {operation}: {message}")]
    Upstream { operation: String, message: String },

    /// Invalid command-line flag values
    #[error("Argument error: {0}")]
    Argument(String),
}

impl HartisizeError {
    pub fn upstream(operation: impl Into<String>, message: impl Into<String>) -> Self {
        HartisizeError::Upstream {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, HartisizeError::Upstream { .. })
    }
}
