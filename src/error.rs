//! Custom error types for auto-hold-click.
//!
//! This module provides structured error types using `thiserror` for better
//! error handling and more informative error messages.

use std::io;
use thiserror::Error;

/// Main error type for auto-hold-click operations.
///
/// Every variant is a recognized domain error; the binary maps any `AhcError`
/// to exit code 1 and everything else to exit code 2.
#[derive(Error, Debug)]
pub enum AhcError {
    /// The config file does not exist.
    #[error("config file '{path}' not found")]
    ConfigNotFound { path: String },

    /// The config file exists but is not valid JSON.
    #[error("config file '{path}' is not valid JSON: {reason}")]
    ConfigParse { path: String, reason: String },

    /// A required config field is absent.
    #[error("config field '{field}' is missing")]
    MissingField { field: String },

    /// A required config field is present but empty.
    #[error("config field '{field}' is empty")]
    EmptyField { field: String },

    /// A config field holds a value outside the supported set.
    #[error("config field '{field}' has unrecognized value '{value}'")]
    UnrecognizedValue { field: String, value: String },

    /// The log settings file could not be loaded or applied.
    #[error("failed to load log settings from '{path}': {reason}")]
    LogSettings { path: String, reason: String },

    /// Error registering or listening for the toggle hotkey.
    #[error("hotkey error: {0}")]
    Hotkey(String),

    /// Error from the mouse injection backend.
    #[error("mouse error: {0}")]
    Mouse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for auto-hold-click operations.
pub type Result<T> = std::result::Result<T, AhcError>;

impl AhcError {
    /// Create a new ConfigNotFound error.
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a new ConfigParse error.
    pub fn config_parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new MissingField error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new EmptyField error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    /// Create a new UnrecognizedValue error.
    pub fn unrecognized_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnrecognizedValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new LogSettings error.
    pub fn log_settings(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LogSettings {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new Hotkey error.
    pub fn hotkey(message: impl Into<String>) -> Self {
        Self::Hotkey(message.into())
    }

    /// Create a new Mouse error.
    pub fn mouse(message: impl Into<String>) -> Self {
        Self::Mouse(message.into())
    }
}
