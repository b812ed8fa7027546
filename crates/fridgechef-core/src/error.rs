//! Core error types for fridgechef-core.
//!
//! This module defines the error hierarchy using thiserror. Pantry edits,
//! filters and screen transitions are total and never produce these; they
//! cover configuration, catalog validation and the detection service seam.
//! CLI handlers return [`Result`] and print the error on exit.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fridgechef-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Ingredient detection errors
    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lookup failures and other one-off messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Catalog and input validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Two recipes share an id
    #[error("Duplicate recipe id {0}")]
    DuplicateRecipeId(u32),

    /// A name is listed both as owned and as missing
    #[error("Recipe {recipe_id} lists '{name}' as both an ingredient and a missing item")]
    OverlappingIngredients { recipe_id: u32, name: String },

    /// A name appears twice in the same list
    #[error("Recipe {recipe_id} lists '{name}' more than once")]
    DuplicateIngredient { recipe_id: u32, name: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Failure classes of an ingredient recognition service.
///
/// The simulator never fails; a real detector must map its failures here so
/// callers can retry or fall back to manual entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    /// The image could not be captured or read
    #[error("Image capture failed: {0}")]
    CaptureFailed(String),

    /// The service ran but recognised nothing
    #[error("No ingredients detected")]
    NoItemsDetected,

    /// The service could not be reached
    #[error("Detection service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl DetectionError {
    /// Whether retrying the same capture could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DetectionError::ServiceUnavailable(_))
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
