//! Ticket CRUD and stats routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use domain::ticket::{TicketPriority, TicketStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::ticket::{self, TicketPatch, TicketRow, TicketScope, TicketStats};
use crate::state::AppState;

#[derive(Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub requester: String,
    pub assignee: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

fn to_response(row: TicketRow) -> TicketResponse {
    TicketResponse {
        id: row.id,
        title: row.title,
        description: row.description,
        status: row.status,
        priority: row.priority,
        created_by: row.created_by,
        assigned_to: row.assigned_to,
        requester: row.requester,
        assignee: row.assignee,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn scope_of(auth: &AuthUser) -> TicketScope {
    TicketScope { user_id: auth.user.id, role: auth.user.role }
}

pub(crate) fn ticket_error_to_status(err: &ticket::TicketError) -> StatusCode {
    match err {
        ticket::TicketError::NotFound(_) => StatusCode::NOT_FOUND,
        ticket::TicketError::Forbidden(_) => StatusCode::FORBIDDEN,
        ticket::TicketError::Invalid(_) => StatusCode::BAD_REQUEST,
        ticket::TicketError::InvalidField { .. } | ticket::TicketError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn log_and_map(err: &ticket::TicketError) -> StatusCode {
    let status = ticket_error_to_status(err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "ticket operation failed");
    }
    status
}

#[derive(Deserialize)]
pub struct CreateTicketBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Option<TicketPriority>,
}

/// Patch body. A missing `assigned_to` leaves the assignee alone; an
/// explicit `null` unassigns.
#[derive(Deserialize)]
pub struct UpdateTicketBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to: Option<Option<Uuid>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}

/// `GET /api/tickets` — list visible tickets.
pub async fn list_tickets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<TicketResponse>>, StatusCode> {
    let rows = ticket::list_tickets(&state.pool, scope_of(&auth))
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/tickets` — open a new ticket.
pub async fn create_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateTicketBody>,
) -> Result<(StatusCode, Json<TicketResponse>), StatusCode> {
    let priority = body.priority.unwrap_or(TicketPriority::Medium);
    let row = ticket::create_ticket(&state.pool, scope_of(&auth), &body.title, &body.description, priority)
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `GET /api/tickets/:id` — fetch one ticket.
pub async fn get_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ticket_id): Path<Uuid>,
) -> Result<Json<TicketResponse>, StatusCode> {
    let row = ticket::get_ticket(&state.pool, scope_of(&auth), ticket_id)
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok(Json(to_response(row)))
}

/// `PATCH /api/tickets/:id` — update fields, status, or assignment.
pub async fn update_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ticket_id): Path<Uuid>,
    Json(body): Json<UpdateTicketBody>,
) -> Result<Json<TicketResponse>, StatusCode> {
    let patch = TicketPatch {
        title: body.title,
        description: body.description,
        priority: body.priority,
        status: body.status,
        assigned_to: body.assigned_to,
    };
    let row = ticket::update_ticket(&state.pool, scope_of(&auth), ticket_id, patch)
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok(Json(to_response(row)))
}

/// `DELETE /api/tickets/:id` — remove a ticket.
pub async fn delete_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ticket_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    ticket::delete_ticket(&state.pool, scope_of(&auth), ticket_id)
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/tickets/stats` — counts by status for the dashboard.
pub async fn stats(State(state): State<AppState>, auth: AuthUser) -> Result<Json<TicketStats>, StatusCode> {
    let stats = ticket::ticket_stats(&state.pool, scope_of(&auth))
        .await
        .map_err(|e| log_and_map(&e))?;
    Ok(Json(stats))
}

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tests;
