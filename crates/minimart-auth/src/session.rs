//! Admin sessions.

use serde::{Deserialize, Serialize};

/// An authenticated admin session.
///
/// In-memory only: sessions die with the process, which is the point
/// for a shared device at a store counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    /// Session ID.
    pub id: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last activity.
    pub last_activity_at: i64,
    /// Unix timestamp when the session expires.
    pub expires_at: i64,
}

impl AdminSession {
    /// Default session duration: 12 hours.
    pub const DEFAULT_DURATION_SECS: i64 = 12 * 60 * 60;

    /// Start a new session at the given time.
    pub fn start(now: i64) -> Self {
        Self {
            id: generate_session_id(now),
            created_at: now,
            last_activity_at: now,
            expires_at: now + Self::DEFAULT_DURATION_SECS,
        }
    }

    /// Start a session with a custom duration.
    pub fn with_duration(mut self, duration_secs: i64) -> Self {
        self.expires_at = self.created_at + duration_secs;
        self
    }

    /// Check if the session has expired.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    /// Update the last-activity timestamp.
    pub fn touch(&mut self, now: i64) {
        self.last_activity_at = now;
    }

    /// Extend the session expiration from the given time.
    pub fn extend(&mut self, now: i64, duration_secs: i64) {
        self.expires_at = now + duration_secs;
        self.touch(now);
    }
}

/// Generate a session ID from the clock and a process-wide counter.
fn generate_session_id(now: i64) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("sess_{:x}_{:x}", now, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = AdminSession::start(1000);
        assert!(!session.is_expired(1000));
        assert!(session.is_expired(1000 + AdminSession::DEFAULT_DURATION_SECS + 1));

        session.extend(2000, 100);
        assert_eq!(session.expires_at, 2100);
        assert_eq!(session.last_activity_at, 2000);
    }

    #[test]
    fn test_custom_duration() {
        let session = AdminSession::start(1000).with_duration(60);
        assert!(!session.is_expired(1060));
        assert!(session.is_expired(1061));
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = AdminSession::start(1000);
        let b = AdminSession::start(1000);
        assert_ne!(a.id, b.id);
    }
}
