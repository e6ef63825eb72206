//! User administration routes.
//!
//! All endpoints here are admin-gated except the assignable list, which
//! moderators need to populate the assignment dropdown.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use domain::role::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::{AuthUser, account_error_to_status, require_role};
use crate::services::account;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UserListItem {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    pub created_at: String,
}

fn to_item(row: account::UserRow) -> UserListItem {
    UserListItem {
        id: row.id,
        email: row.email,
        first_name: row.first_name,
        last_name: row.last_name,
        role: row.role,
        created_at: row.created_at,
    }
}

fn log_and_map(err: &account::AccountError) -> StatusCode {
    let status = account_error_to_status(err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "account operation failed");
    }
    status
}

/// `GET /api/users` — list all accounts (admin).
pub async fn list_users(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<UserListItem>>, StatusCode> {
    require_role(&auth, Role::Admin)?;
    let rows = account::list_users(&state.pool).await.map_err(|e| log_and_map(&e))?;
    Ok(Json(rows.into_iter().map(to_item).collect()))
}

/// `GET /api/users/assignable` — staff accounts for ticket assignment (moderator+).
pub async fn list_assignable(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserListItem>>, StatusCode> {
    require_role(&auth, Role::Moderator)?;
    let rows = account::list_assignable(&state.pool).await.map_err(|e| log_and_map(&e))?;
    Ok(Json(rows.into_iter().map(to_item).collect()))
}

#[derive(Deserialize)]
pub struct CreateModeratorBody {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// `POST /api/users/moderators` — create a moderator account (admin).
pub async fn create_moderator(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateModeratorBody>,
) -> Result<(StatusCode, Json<UserListItem>), StatusCode> {
    require_role(&auth, Role::Admin)?;

    let email = account::normalize_email(&body.email).ok_or(StatusCode::BAD_REQUEST)?;
    let row = account::create_user(
        &state.pool,
        &email,
        &body.password,
        body.first_name.as_deref(),
        body.last_name.as_deref(),
        Role::Moderator,
    )
    .await
    .map_err(|e| log_and_map(&e))?;

    Ok((StatusCode::CREATED, Json(to_item(row))))
}

#[derive(Deserialize)]
pub struct UpdateRoleBody {
    pub role: String,
}

/// `PATCH /api/users/:id/role` — change an account's role (admin).
pub async fn update_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateRoleBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    require_role(&auth, Role::Admin)?;

    // Unknown role names are rejected outright, never defaulted.
    let role = Role::from_name(&body.role).ok_or(StatusCode::BAD_REQUEST)?;

    // Admins cannot change their own role; a second admin must do it.
    if user_id == auth.user.id {
        return Err(StatusCode::CONFLICT);
    }

    account::set_role(&state.pool, user_id, role)
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/users/:id` — remove an account (admin).
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    require_role(&auth, Role::Admin)?;

    if user_id == auth.user.id {
        return Err(StatusCode::CONFLICT);
    }

    account::delete_user(&state.pool, user_id)
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
