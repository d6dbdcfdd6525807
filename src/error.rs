//! Error types for Cosmic Folio
//!
//! This module defines all custom error types used throughout the application.
//! Error types are organized by category for clear error handling and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Locale tag errors
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Site route errors
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the configuration file
    #[error("Could not save configuration: {0}")]
    SaveError(String),

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing required configuration value
    #[error("Missing configuration value: {key}")]
    MissingValue { key: String },

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Locale tag errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// Tag does not look like a language tag
    #[error("Invalid locale tag: {tag}")]
    InvalidTag { tag: String },

    /// Same tag listed twice
    #[error("Locale listed more than once: {tag}")]
    Duplicate { tag: String },

    /// Tag is not one of the site's locales
    #[error("Locale is not available on this site: {tag}")]
    NotAvailable { tag: String },
}

/// Site route errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Empty path
    #[error("Route path is empty")]
    Empty,

    /// Path must start with '/'
    #[error("Route path must be absolute: {path}")]
    NotAbsolute { path: String },

    /// Query pair without a key
    #[error("Malformed query parameter: {pair}")]
    MalformedQuery { pair: String },
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for locale operations
pub type LocaleResult<T> = Result<T, LocaleError>;

/// Result type alias for route operations
pub type RouteResult<T> = Result<T, RouteError>;

impl ConfigError {
    /// Create a user-friendly error message suitable for the status line
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::LoadError { .. } => {
                "The configuration file could not be read. Using defaults.".to_string()
            }
            ConfigError::ParseError(_) => {
                "The configuration file is not valid JSON. Using defaults.".to_string()
            }
            ConfigError::SaveError(_) => {
                "Your language preference could not be saved.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl AppError {
    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Locale(LocaleError::NotAvailable { tag }) => {
                format!("The site is not available in \"{}\".", tag)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_error_display() {
        let err = LocaleError::InvalidTag {
            tag: "EN_us".to_string(),
        };
        assert!(err.to_string().contains("EN_us"));
    }

    #[test]
    fn test_config_error_user_message() {
        let err = ConfigError::SaveError("disk full".to_string());
        assert!(err.user_message().contains("preference"));
    }

    #[test]
    fn test_app_error_from_route_error() {
        let app_err: AppError = RouteError::Empty.into();
        assert!(matches!(app_err, AppError::Route(_)));
    }

    #[test]
    fn test_app_error_user_message_for_unavailable_locale() {
        let app_err: AppError = LocaleError::NotAvailable {
            tag: "it".to_string(),
        }
        .into();
        assert!(app_err.user_message().contains("\"it\""));
    }
}
