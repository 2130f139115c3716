// Rust guideline compliant 2026-10-12

//! Error types for the Rigmarket core library.

use thiserror::Error;

/// Result type alias for Rigmarket operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Rigmarket operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed or missing input, with the offending field named.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the field that failed validation.
        field: String,
        /// Human-readable reason.
        message: String,
    },

    /// Listing not found.
    #[error("Listing not found: {0}")]
    NotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Requester is not the owner of the listing.
    ///
    /// The message is deliberately generic and never names the owner.
    #[error("Not authorized to modify this listing")]
    Forbidden,

    /// Transition rejected because of the listing's current state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying persistence could not be reached.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Builds a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
