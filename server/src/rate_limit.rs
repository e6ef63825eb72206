//! In-memory rate limiting for credential attempts.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by normalized email. Two limits enforced:
//! - Per-account: 5 login attempts per 5 minutes
//! - Global: 100 login attempts per minute
//!
//! Entries are pruned as they age out of the window, so memory stays
//! proportional to the set of recently active accounts.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_PER_KEY_LIMIT: usize = 5;
const DEFAULT_PER_KEY_WINDOW_SECS: u64 = 300;

const DEFAULT_GLOBAL_LIMIT: usize = 100;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy)]
struct RateLimitConfig {
    per_key_limit: usize,
    per_key_window: Duration,
    global_limit: usize,
    global_window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        let per_key_window_secs = env_parse("LOGIN_RATE_LIMIT_WINDOW_SECS", DEFAULT_PER_KEY_WINDOW_SECS);
        let global_window_secs = env_parse("LOGIN_RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS);

        Self {
            per_key_limit: env_parse("LOGIN_RATE_LIMIT", DEFAULT_PER_KEY_LIMIT),
            per_key_window: Duration::from_secs(per_key_window_secs),
            global_limit: env_parse("LOGIN_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(global_window_secs),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("too many attempts for this account")]
    PerKeyExceeded,
    #[error("too many attempts, try again later")]
    GlobalExceeded,
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

struct RateLimiterInner {
    /// Per-key attempt timestamps.
    key_attempts: HashMap<String, VecDeque<Instant>>,
    /// Global attempt timestamps.
    global_attempts: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimiterInner {
                key_attempts: HashMap::new(),
                global_attempts: VecDeque::new(),
            })),
            config: RateLimitConfig::from_env(),
        }
    }

    /// Record an attempt for `key`, rejecting it if either window is full.
    ///
    /// # Errors
    ///
    /// Returns a [`RateLimitError`] when the per-key or global window has
    /// reached its limit.
    pub fn check_and_record(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(key, Instant::now())
    }

    /// Same as [`Self::check_and_record`] with an injectable clock for tests.
    pub(crate) fn check_and_record_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        prune(&mut inner.global_attempts, now, self.config.global_window);
        if inner.global_attempts.len() >= self.config.global_limit {
            return Err(RateLimitError::GlobalExceeded);
        }

        let attempts = inner.key_attempts.entry(key.to_owned()).or_default();
        prune(attempts, now, self.config.per_key_window);
        if attempts.len() >= self.config.per_key_limit {
            return Err(RateLimitError::PerKeyExceeded);
        }

        attempts.push_back(now);
        inner.global_attempts.push_back(now);
        Ok(())
    }

    /// Drop per-key state for `key`, e.g. after a successful login.
    pub fn reset(&self, key: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.key_attempts.remove(key);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

fn prune(attempts: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = attempts.front() {
        if now.duration_since(front) > window {
            attempts.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
