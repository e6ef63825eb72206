//! Route access decisions.
//!
//! Pure function from auth state plus route requirements to a single
//! decision, so guarded pages and tests share one code path.
//!
//! DECISION ORDER
//! ==============
//! 1. Session still loading: hold rendering, no redirect yet.
//! 2. Auth required but anonymous: send to the login route.
//! 3. Role required but not satisfied (or unknown): permission denied.
//! 4. Otherwise: render.

use domain::role::Role;

use crate::state::auth::AuthState;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const PERMISSION_DENIED_PATH: &str = "/permission-denied";

/// Outcome of evaluating a guarded route against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session fetch in flight. Render nothing and wait.
    Pending,
    /// Requirements met. Render the protected content.
    Allow,
    /// Requirements not met. Navigate to the given path.
    Redirect(String),
}

/// Evaluate a guarded route.
///
/// An unrecognized role name never satisfies a role requirement, so a
/// stale client facing new server roles locks out rather than in.
#[must_use]
pub fn decide(
    auth: &AuthState,
    require_auth: bool,
    required_role: Option<Role>,
    redirect_to: &str,
) -> GateDecision {
    if auth.loading {
        return GateDecision::Pending;
    }
    if require_auth && !auth.is_authenticated() {
        return GateDecision::Redirect(redirect_to.to_owned());
    }
    if let Some(required) = required_role {
        let satisfied = auth
            .user
            .as_ref()
            .and_then(|user| Role::rank_of(&user.role))
            .is_some_and(|rank| rank >= required.rank());
        if !satisfied {
            return GateDecision::Redirect(PERMISSION_DENIED_PATH.to_owned());
        }
    }
    GateDecision::Allow
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
