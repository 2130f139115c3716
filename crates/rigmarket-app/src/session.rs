// Rust guideline compliant 2026-10-12

//! Verified caller identity.

use serde::{Deserialize, Serialize};

/// Identity of an authenticated caller.
///
/// Authentication happens outside this crate; services trust whatever is
/// passed in and only use `id` for ownership checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user reference, matched against `Listing::seller_id`.
    pub id: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub username: String,
}

impl Identity {
    /// Creates an identity.
    pub fn new(id: impl Into<String>, email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
        }
    }
}
