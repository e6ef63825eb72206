//! Account service — signup, login, and user administration.
//!
//! ERROR HANDLING
//! ==============
//! Login failures collapse into a single `InvalidCredentials` error so the
//! API never reveals whether an email is registered. Role text loaded from
//! the database is parsed against the hierarchy table; an unknown value is
//! surfaced as `UnknownRole` instead of being passed along.

use domain::role::Role;
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use uuid::Uuid;

use super::password;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {0} characters")]
    WeakPassword(usize),
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user not found: {0}")]
    NotFound(Uuid),
    #[error("unknown role in database: {0}")]
    UnknownRole(String),
    #[error("password hashing failed: {0}")]
    Password(#[from] password::PasswordError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Lowercase and structurally validate an email address.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Trim an optional profile field, mapping empty to absent.
#[must_use]
pub fn normalize_name(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

fn admin_email() -> Option<String> {
    std::env::var("ADMIN_EMAIL").ok().and_then(|v| normalize_email(&v))
}

/// User row returned from account queries.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    /// `YYYY-MM-DD` registration date.
    pub created_at: String,
}

fn user_from_row(row: &PgRow) -> Result<UserRow, AccountError> {
    let role_name: String = row.get("role");
    let role = Role::from_name(&role_name).ok_or_else(|| AccountError::UnknownRole(role_name))?;
    Ok(UserRow {
        id: row.get("id"),
        email: row.get("email"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        role,
        created_at: row.get("created_at"),
    })
}

const USER_COLUMNS: &str = "id, email, first_name, last_name, role, to_char(created_at, 'YYYY-MM-DD') AS created_at";

/// Register a new account.
///
/// The account named by `ADMIN_EMAIL` is created as admin; everyone else
/// starts as a plain user. Moderators only come from [`create_user`].
///
/// # Errors
///
/// `InvalidEmail`/`WeakPassword` on bad input, `EmailTaken` on duplicate
/// registration, otherwise hashing or database errors.
pub async fn signup(
    pool: &PgPool,
    email: &str,
    password: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<UserRow, AccountError> {
    let normalized = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::WeakPassword(MIN_PASSWORD_LEN));
    }

    let role = if admin_email().as_deref() == Some(&normalized) { Role::Admin } else { Role::User };

    create_user(pool, &normalized, password, first_name, last_name, role).await
}

/// Insert a user with an explicit role. `email` must already be normalized.
///
/// # Errors
///
/// `EmailTaken` when the email is already registered.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    role: Role,
) -> Result<UserRow, AccountError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::WeakPassword(MIN_PASSWORD_LEN));
    }
    let hash = password::hash_password(password)?;

    let row = sqlx::query(&format!(
        "INSERT INTO users (email, password_hash, first_name, last_name, role)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (email) DO NOTHING
         RETURNING {USER_COLUMNS}"
    ))
    .bind(email)
    .bind(&hash)
    .bind(normalize_name(first_name))
    .bind(normalize_name(last_name))
    .bind(role.as_str())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(AccountError::EmailTaken);
    };
    let user = user_from_row(&row)?;
    tracing::info!(user_id = %user.id, role = %user.role, "account created");
    Ok(user)
}

/// Check credentials and return the account's user id.
///
/// # Errors
///
/// `InvalidCredentials` for an unknown email or wrong password; the two
/// cases are indistinguishable to the caller.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AccountError> {
    let normalized = normalize_email(email).ok_or(AccountError::InvalidCredentials)?;

    let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = $1")
        .bind(&normalized)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AccountError::InvalidCredentials);
    };
    let hash: String = row.get("password_hash");
    if !password::verify_password(password, &hash) {
        return Err(AccountError::InvalidCredentials);
    }
    Ok(row.get("id"))
}

/// Fetch a single user.
pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<UserRow, AccountError> {
    let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AccountError::NotFound(user_id));
    };
    user_from_row(&row)
}

/// List all users, newest first.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRow>, AccountError> {
    let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// List users at moderator rank or above, for ticket assignment.
pub async fn list_assignable(pool: &PgPool) -> Result<Vec<UserRow>, AccountError> {
    let rows = sqlx::query(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE role IN ($1, $2) ORDER BY email"
    ))
    .bind(Role::Moderator.as_str())
    .bind(Role::Admin.as_str())
    .fetch_all(pool)
    .await?;

    rows.iter().map(user_from_row).collect()
}

/// Change a user's role. Their open sessions are revoked so the new role
/// takes effect on next login.
///
/// # Errors
///
/// `NotFound` if the user does not exist.
pub async fn set_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<(), AccountError> {
    let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
        .bind(user_id)
        .bind(role.as_str())
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AccountError::NotFound(user_id));
    }
    super::session::delete_user_sessions(pool, user_id).await?;
    tracing::info!(%user_id, role = %role, "role changed");
    Ok(())
}

/// Delete a user and (via cascade) their sessions and tickets.
///
/// # Errors
///
/// `NotFound` if the user does not exist.
pub async fn delete_user(pool: &PgPool, user_id: Uuid) -> Result<(), AccountError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AccountError::NotFound(user_id));
    }
    tracing::info!(%user_id, "account deleted");
    Ok(())
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
