//! The admin password gate.

use crate::lockout::{LockoutPolicy, LoginAttempts};
use crate::password::PasswordHasher;
use crate::session::AdminSession;
use crate::AuthError;

/// Password gate in front of the admin panel.
///
/// Holds the stored password hash and the lockout tally. One instance
/// per application session; callers keep the returned [`AdminSession`]
/// and check its expiry before admin operations.
pub struct AdminAuth {
    hasher: PasswordHasher,
    password_hash: String,
    policy: LockoutPolicy,
    attempts: LoginAttempts,
}

impl AdminAuth {
    /// Create a gate from a stored password hash.
    pub fn new(password_hash: impl Into<String>, policy: LockoutPolicy) -> Self {
        Self {
            hasher: PasswordHasher::default(),
            password_hash: password_hash.into(),
            policy,
            attempts: LoginAttempts::new(),
        }
    }

    /// Create a gate from a plain password, hashing it first.
    ///
    /// Rejects passwords that fail the strength check.
    pub fn from_password(password: &str, policy: LockoutPolicy) -> Result<Self, AuthError> {
        PasswordHasher::validate_password(password)?;
        let hasher = PasswordHasher::default();
        let password_hash = hasher.hash(password)?;
        Ok(Self {
            hasher,
            password_hash,
            policy,
            attempts: LoginAttempts::new(),
        })
    }

    /// Restore a previously saved lockout tally.
    ///
    /// The tally is plain data so callers can persist it across
    /// process restarts; without this, restarting would reset the
    /// lock.
    pub fn with_attempts(mut self, attempts: LoginAttempts) -> Self {
        self.attempts = attempts;
        self
    }

    /// The current lockout tally, for persisting.
    pub fn attempts(&self) -> &LoginAttempts {
        &self.attempts
    }

    /// Attempt a login at the given time.
    ///
    /// Failures feed the lockout tally; once locked, every attempt
    /// reports [`AuthError::LockedOut`] until the lock expires, even
    /// with the right password.
    pub fn login(&mut self, password: &str, now: i64) -> Result<AdminSession, AuthError> {
        if self.attempts.is_locked(now) {
            return Err(AuthError::LockedOut {
                retry_after_secs: self.attempts.retry_after(now),
            });
        }

        if self.hasher.verify(password, &self.password_hash)? {
            self.attempts.record_success();
            Ok(AdminSession::start(now))
        } else {
            self.attempts.record_failure(&self.policy, now);
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Attempts left before the next failure locks the form.
    pub fn remaining_attempts(&self) -> u32 {
        self.attempts.remaining_attempts(&self.policy)
    }

    /// Validate a session at the given time.
    pub fn validate_session(&self, session: &AdminSession, now: i64) -> Result<(), AuthError> {
        if session.is_expired(now) {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }
}
