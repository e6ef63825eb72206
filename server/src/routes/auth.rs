//! Auth routes — signup, login, session management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use domain::role::Role;
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

use crate::services::{account, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Reject callers below `required` rank.
pub(crate) fn require_role(auth: &AuthUser, required: Role) -> Result<(), StatusCode> {
    if auth.user.role.satisfies(required) {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

pub(crate) fn account_error_to_status(err: &account::AccountError) -> StatusCode {
    match err {
        account::AccountError::InvalidEmail | account::AccountError::WeakPassword(_) => StatusCode::BAD_REQUEST,
        account::AccountError::EmailTaken => StatusCode::CONFLICT,
        account::AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        account::AccountError::NotFound(_) => StatusCode::NOT_FOUND,
        account::AccountError::UnknownRole(_)
        | account::AccountError::Password(_)
        | account::AccountError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Current-user payload shared by signup/login/me.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
}

impl From<session::SessionUser> for UserResponse {
    fn from(user: session::SessionUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        }
    }
}

impl From<account::UserRow> for UserResponse {
    fn from(user: account::UserRow) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        }
    }
}

#[derive(Deserialize)]
pub struct SignupBody {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/signup` — register, open a session, set the cookie.
pub async fn signup(State(state): State<AppState>, Json(body): Json<SignupBody>) -> Response {
    let user = match account::signup(
        &state.pool,
        &body.email,
        &body.password,
        body.first_name.as_deref(),
        body.last_name.as_deref(),
    )
    .await
    {
        Ok(user) => user,
        Err(e) => {
            let status = account_error_to_status(&e);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!(error = %e, "signup failed");
                return status.into_response();
            }
            return (status, e.to_string()).into_response();
        }
    };

    open_session(&state, user).await
}

/// `POST /api/auth/login` — check credentials, open a session, set the cookie.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginBody>) -> Response {
    // Throttle by the normalized email so attempts against one account
    // cannot be spread across spellings.
    let key = account::normalize_email(&body.email).unwrap_or_else(|| body.email.trim().to_ascii_lowercase());
    if let Err(e) = state.login_limiter.check_and_record(&key) {
        return (StatusCode::TOO_MANY_REQUESTS, e.to_string()).into_response();
    }

    let user_id = match account::login(&state.pool, &body.email, &body.password).await {
        Ok(id) => id,
        Err(account::AccountError::InvalidCredentials) => {
            return (StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let user = match account::get_user(&state.pool, user_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "user fetch after login failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    state.login_limiter.reset(&key);
    open_session(&state, user).await
}

async fn open_session(state: &AppState, user: account::UserRow) -> Response {
    let token = match session::create_session(&state.pool, user.id).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let jar = CookieJar::new().add(session_cookie(token));
    (jar, Json(UserResponse::from(user))).into_response()
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(auth.user))
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
