// Rust guideline compliant 2026-10-12

//! Error handling for Rigmarket application services.

use rigmarket_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for service and CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input validation failed.
    ValidationError,
    /// The requested listing or category was not found.
    NotFound,
    /// The requester does not own the listing.
    Forbidden,
    /// The listing's current state rejects the operation.
    Conflict,
    /// Persistence could not be reached.
    StoreUnavailable,
    /// The provided identifier matched multiple listings.
    AmbiguousId,
    /// The market directory has not been initialized.
    MarketNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration could not be loaded or is invalid.
    ConfigError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Market directory is missing.
    #[error("Rigmarket not initialized at {path}. Run 'rig init' first.")]
    MarketNotInitialized {
        /// Path where `.rigmarket` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MarketNotInitialized { .. } => ErrorCode::MarketNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::StoreUnavailable,
            AppError::Core(core) => match core {
                CoreError::Validation { .. } => ErrorCode::ValidationError,
                CoreError::NotFound(_) | CoreError::CategoryNotFound(_) => ErrorCode::NotFound,
                CoreError::Forbidden => ErrorCode::Forbidden,
                CoreError::Conflict(_) => ErrorCode::Conflict,
                CoreError::StoreUnavailable(_) | CoreError::Io(_) => ErrorCode::StoreUnavailable,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Config(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::MarketNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::InvalidInput(_) | AppError::Io(_) => None,
            AppError::Core(core) => match core {
                CoreError::Validation { field, .. } => Some(serde_json::json!({
                    "field": field,
                })),
                CoreError::CategoryNotFound(slug) => Some(serde_json::json!({
                    "category": slug,
                })),
                CoreError::AmbiguousId(partial, matches) => Some(serde_json::json!({
                    "partial": partial,
                    "matches": matches,
                })),
                _ => None,
            },
        }
    }
}
