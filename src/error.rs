//! Centralized error types for ArtTable.
//!
//! This module provides a unified error hierarchy for the application with
//! user-friendly error messages. All error types use `thiserror` for
//! ergonomic error handling.
//!
//! Page-fetch failures never reach this type: they are logged at the point
//! of arrival in the event loop and suppressed. `AppError` covers the
//! startup and shutdown paths where failing loudly is correct.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors (file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    ///
    /// Printed to stderr after the terminal has been restored, so it must
    /// read well without surrounding context.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                _ => format!("Configuration error: {}", e),
            },
            AppError::Api(e) => match e {
                ApiError::InvalidUrl(url) => {
                    format!("'{}' is not a valid catalog URL.", url)
                }
                ApiError::Network(_) => {
                    "Connection failed. Please check your internet connection.".to_string()
                }
                _ => format!("Catalog error: {}", e),
            },
            AppError::Io(e) => format!("A file operation failed: {}", e),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::NoConfigDir;
        let app_err: AppError = config_err.into();
        assert!(matches!(
            app_err,
            AppError::Config(ConfigError::NoConfigDir)
        ));
    }

    #[test]
    fn test_app_error_from_api_error() {
        let api_err = ApiError::RateLimited;
        let app_err: AppError = api_err.into();
        assert!(matches!(app_err, AppError::Api(ApiError::RateLimited)));
    }

    #[test]
    fn test_user_message_invalid_url() {
        let err = AppError::Api(ApiError::InvalidUrl("ftp://example".to_string()));
        let msg = err.user_message();
        assert!(msg.contains("ftp://example"));
        assert!(msg.contains("not a valid"));
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError(
            "page_size must be at least 1".to_string(),
        ));
        assert!(err.user_message().contains("page_size"));
    }

    #[test]
    fn test_user_message_no_config_dir() {
        let err = AppError::Config(ConfigError::NoConfigDir);
        assert!(err.user_message().contains("configuration directory"));
    }

    #[test]
    fn test_terminal_error() {
        let err = AppError::terminal("raw mode failed");
        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(err.user_message(), "Terminal error: raw mode failed");
    }
}
