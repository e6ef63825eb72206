//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON API under `/api`, health probe at `/healthz`, and the built WASM
//! frontend served as static files with an SPA fallback to `index.html` so
//! client-side routes deep-link correctly.

pub mod auth;
pub mod tickets;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/tickets", get(tickets::list_tickets).post(tickets::create_ticket))
        .route("/api/tickets/stats", get(tickets::stats))
        .route(
            "/api/tickets/{id}",
            get(tickets::get_ticket)
                .patch(tickets::update_ticket)
                .delete(tickets::delete_ticket),
        )
        .route("/api/users", get(users::list_users))
        .route("/api/users/assignable", get(users::list_assignable))
        .route("/api/users/moderators", post(users::create_moderator))
        .route("/api/users/{id}/role", patch(users::update_role))
        .route("/api/users/{id}", delete(users::delete_user))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the path to the built frontend bundle.
fn client_dist_dir() -> PathBuf {
    std::env::var("CLIENT_DIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application router: API + static SPA serving.
pub fn app(state: AppState) -> Router {
    let dist = client_dist_dir();
    let spa = ServeDir::new(&dist)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(dist.join("index.html")));

    api_routes(state)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
