//! Failed-login lockout bookkeeping.

use serde::{Deserialize, Serialize};

/// Lockout policy for the admin login form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LockoutPolicy {
    /// Consecutive failures allowed before locking.
    pub max_attempts: u32,
    /// How long a lock lasts, in seconds.
    pub lockout_secs: i64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout_secs: 5 * 60,
        }
    }
}

/// Running tally of failed login attempts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginAttempts {
    /// Consecutive failures since the last success.
    pub consecutive_failures: u32,
    /// Unix timestamp the current lock expires, if locked.
    pub locked_until: Option<i64>,
}

impl LoginAttempts {
    /// Create a clean slate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed attempt; locks when the policy's limit is hit.
    pub fn record_failure(&mut self, policy: &LockoutPolicy, now: i64) {
        self.consecutive_failures += 1;
        if self.consecutive_failures >= policy.max_attempts {
            self.locked_until = Some(now + policy.lockout_secs);
        }
    }

    /// Record a successful login, resetting the tally.
    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
        self.locked_until = None;
    }

    /// Check if login is currently locked.
    ///
    /// An expired lock clears itself on the next check; the failure
    /// count starts over after a lock runs out.
    pub fn is_locked(&mut self, now: i64) -> bool {
        match self.locked_until {
            Some(until) if now < until => true,
            Some(_) => {
                self.consecutive_failures = 0;
                self.locked_until = None;
                false
            }
            None => false,
        }
    }

    /// Seconds until the current lock expires, zero when unlocked.
    pub fn retry_after(&self, now: i64) -> i64 {
        self.locked_until.map_or(0, |until| (until - now).max(0))
    }

    /// Attempts left before the next failure locks the form.
    pub fn remaining_attempts(&self, policy: &LockoutPolicy) -> u32 {
        policy.max_attempts.saturating_sub(self.consecutive_failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> LockoutPolicy {
        LockoutPolicy {
            max_attempts: 3,
            lockout_secs: 60,
        }
    }

    #[test]
    fn test_locks_after_max_attempts() {
        let policy = policy();
        let mut attempts = LoginAttempts::new();

        attempts.record_failure(&policy, 100);
        attempts.record_failure(&policy, 101);
        assert!(!attempts.is_locked(102));
        assert_eq!(attempts.remaining_attempts(&policy), 1);

        attempts.record_failure(&policy, 102);
        assert!(attempts.is_locked(103));
        assert_eq!(attempts.retry_after(103), 59);
    }

    #[test]
    fn test_success_resets_tally() {
        let policy = policy();
        let mut attempts = LoginAttempts::new();

        attempts.record_failure(&policy, 100);
        attempts.record_failure(&policy, 101);
        attempts.record_success();

        assert_eq!(attempts.consecutive_failures, 0);
        assert_eq!(attempts.remaining_attempts(&policy), 3);
    }

    #[test]
    fn test_lock_expires() {
        let policy = policy();
        let mut attempts = LoginAttempts::new();

        for t in 0..3 {
            attempts.record_failure(&policy, t);
        }
        assert!(attempts.is_locked(10));
        assert!(!attempts.is_locked(62));
        // The tally starts over once the lock has run out.
        assert_eq!(attempts.remaining_attempts(&policy), 3);
    }
}
