//! Authentication state tracking the current user and loading status.
//!
//! DESIGN
//! ======
//! Held in an `RwSignal<AuthState>` provided via context by the root
//! component, so every page and the access gate read the same session and
//! tests can supply arbitrary fixtures without global setup.
//!
//! Session fetches carry an epoch token. Each fetch bumps the epoch and a
//! resolution is applied only if its epoch is still current, so a slow
//! stale response can never overwrite the outcome of a later login or
//! logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use crate::net::types::User;

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Monotonic token identifying the most recent session mutation.
    pub epoch: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        // The app starts before the first `/api/auth/me` round trip, so the
        // initial state is loading; the gate must not decide yet.
        Self { user: None, loading: true, epoch: 0 }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Start a session fetch: enter loading and return the epoch the
    /// eventual resolution must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.epoch += 1;
        self.epoch
    }

    /// Apply a fetch result. A resolution whose epoch is no longer current
    /// belongs to a superseded request and is dropped.
    pub fn resolve(&mut self, epoch: u64, user: Option<User>) {
        if epoch == self.epoch {
            self.user = user;
            self.loading = false;
        }
    }

    /// Directly install a session outcome (login, signup, logout). Bumps
    /// the epoch so any in-flight fetch resolves stale.
    pub fn set_user(&mut self, user: Option<User>) {
        self.epoch += 1;
        self.user = user;
        self.loading = false;
    }
}
