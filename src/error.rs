//! Error type for the token subsystem.
//!
//! `valid_token` never surfaces these — it collapses every failure mode into
//! a boolean so callers cannot leak which check failed. The resolution path
//! returns them as typed errors for the authentication middleware to map to
//! responses.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    /// Signature mismatch, wrong issuer, or unparseable token structure.
    #[error("Invalid token")]
    InvalidToken,
    /// Signature-valid token whose expiry is in the past.
    #[error("Token expired")]
    ExpiredToken,
    /// Signature-valid token whose claims are absent or of the wrong shape.
    #[error("Malformed token claims: {detail}")]
    MalformedToken { detail: String },
    /// Valid token referencing a user with no matching record.
    #[error("Unknown user: {user_id}")]
    UnknownUser { user_id: i64 },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AuthError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn malformed_token(detail: impl Into<String>) -> Self {
        Self::MalformedToken {
            detail: detail.into(),
        }
    }

    pub fn unknown_user(user_id: i64) -> Self {
        Self::UnknownUser { user_id }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}
