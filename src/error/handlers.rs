//! Standardized mapping of HTTP and transport failures onto [`HartisizeError`]

use crate::error::HartisizeError;
use reqwest::StatusCode;

/// Standard error handler for HTTP responses
pub struct HttpErrorHandler;

impl HttpErrorHandler {
    /// Handle registry-related HTTP errors
    pub fn handle_registry_error(
        status: StatusCode,
        error_text: &str,
        operation: &str,
    ) -> HartisizeError {
        let message = match status.as_u16() {
            401 => format!("Unauthorized, check username and password: {}", error_text),
            403 => format!("Forbidden, insufficient permissions: {}", error_text),
            404 => format!("Project or repository not found: {}", error_text),
            429 => format!("Rate limited: {}", error_text),
            500 => format!("Registry server error: {}", error_text),
            502 | 503 => format!("Registry unavailable: {}", error_text),
            _ => format!("Unexpected status {}: {}", status, error_text),
        };

        HartisizeError::upstream(operation, message)
    }
}

/// Network error categorization and handling
pub struct NetworkErrorHandler;

impl NetworkErrorHandler {
    /// Categorize and format network errors with helpful context
    pub fn handle_network_error(error: &reqwest::Error, context: &str) -> HartisizeError {
        let message = if error.is_timeout() {
            format!("timeout: {}", error)
        } else if error.is_connect() {
            format!("connection error: {}", error)
        } else if error.is_decode() {
            format!("invalid response body: {}", error)
        } else if error.to_string().contains("certificate") {
            format!("TLS certificate error: {}", error)
        } else {
            format!("network error: {}", error)
        };

        HartisizeError::upstream(context, message)
    }
}
