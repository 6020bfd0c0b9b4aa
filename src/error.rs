//! Error types for the pieces framework
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the pieces framework
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Definition Errors
    // ============================================================================
    #[error("Invalid {kind} definition '{name}': {message}")]
    InvalidDefinition {
        kind: String,
        name: String,
        message: String,
    },

    #[error("Unknown trigger strategy: {value}")]
    UnknownTriggerStrategy { value: String },

    #[error("Invalid release '{value}': {message}")]
    InvalidRelease { value: String, message: String },

    #[error("Duplicate {kind} name: {name}")]
    DuplicateName { kind: String, name: String },

    // ============================================================================
    // Context Errors
    // ============================================================================
    #[error("Unknown context version: {value}")]
    UnknownContextVersion { value: String },

    #[error("Execution failed: {message}")]
    Execution { message: String },

    // ============================================================================
    // Translation Errors
    // ============================================================================
    #[error("Unknown locale: {value}")]
    UnknownLocale { value: String },

    #[error("Invalid translation path '{path}': {message}")]
    InvalidTranslationPath { path: String, message: String },

    #[error("Translation failed: {message}")]
    Translation { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid definition error
    pub fn invalid_definition(
        kind: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidDefinition {
            kind: kind.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an unknown trigger strategy error
    pub fn unknown_strategy(value: impl Into<String>) -> Self {
        Self::UnknownTriggerStrategy {
            value: value.into(),
        }
    }

    /// Create an invalid release error
    pub fn invalid_release(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRelease {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    /// Create a translation error
    pub fn translation(message: impl Into<String>) -> Self {
        Self::Translation {
            message: message.into(),
        }
    }

    /// Create an invalid translation path error
    pub fn translation_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTranslationPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error aborts piece loading
    ///
    /// Construction errors must never produce a partially-initialized piece.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDefinition { .. }
                | Error::UnknownTriggerStrategy { .. }
                | Error::UnknownContextVersion { .. }
                | Error::InvalidRelease { .. }
                | Error::DuplicateName { .. }
        )
    }
}

/// Result type alias for the pieces framework
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
