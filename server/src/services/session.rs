//! Session management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived random session tokens stored in Postgres and
//! carried in an HttpOnly cookie. Validation joins the user row so every
//! authenticated request gets a fresh view of the account, including role
//! changes made since login.
//!
//! A role value outside the hierarchy table invalidates the session rather
//! than passing through: access control fails closed.

use std::fmt::Write;

use domain::role::Role;
use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, normalized lowercase.
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Account role, parsed from the hierarchy table.
    pub role: Role,
}

impl SessionUser {
    /// Canonical display name for logs and responses.
    #[must_use]
    pub fn display_name(&self) -> String {
        domain::user::display_name(self.first_name.as_deref(), self.last_name.as_deref(), &self.email)
    }
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
///
/// Returns `None` for unknown/expired tokens and for accounts whose role
/// column does not name a known role.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.email, u.first_name, u.last_name, u.role
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.and_then(|r| {
        let role_name: String = r.get("role");
        let Some(role) = Role::from_name(&role_name) else {
            tracing::warn!(role = %role_name, "rejecting session with unknown role");
            return None;
        };
        Some(SessionUser {
            id: r.get("id"),
            email: r.get("email"),
            first_name: r.get("first_name"),
            last_name: r.get("last_name"),
            role,
        })
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete every session belonging to a user, e.g. after a role change or
/// account deletion.
pub async fn delete_user_sessions(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
