//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Too many failed attempts; try again later.
    #[error("locked out, retry in {retry_after_secs}s")]
    LockedOut {
        /// Seconds until the lock expires.
        retry_after_secs: i64,
    },

    /// Session expired.
    #[error("session expired")]
    SessionExpired,

    /// Password too weak.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Check if this is an authentication failure (as opposed to an
    /// operational problem).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::LockedOut { .. } | AuthError::SessionExpired
        )
    }
}
