//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`LoadError`] - Folder listing failures reported by a content provider
//! - [`TransferError`] - Download and clipboard failures

use thiserror::Error;

use crate::config::text::LOAD_ERROR;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failure to list a folder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The provider has no folder with this id.
    #[error("Folder not found: {0}")]
    FolderNotFound(String),
    /// The listing could not be decoded.
    #[error("Invalid folder data: {0}")]
    InvalidData(String),
    /// Message reported by the provider as is.
    #[error("{0}")]
    Provider(String),
}

impl LoadError {
    /// Message for the error view, falling back to the generic text.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            LOAD_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Download and clipboard failures. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The browser refused to save the retrieved content.
    #[error("Save failed: {0}")]
    SaveFailed(String),
    /// Clipboard API missing or write rejected.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_provider_text() {
        let err = LoadError::Provider("Папка недоступна".to_string());
        assert_eq!(err.user_message(), "Папка недоступна");
    }

    #[test]
    fn test_user_message_falls_back_to_default() {
        let err = LoadError::Provider("  ".to_string());
        assert_eq!(err.user_message(), LOAD_ERROR);
    }

    #[test]
    fn test_fetch_error_is_transparent() {
        let err = LoadError::from(FetchError::HttpError(503));
        assert_eq!(err.user_message(), "HTTP error: 503");
    }
}
