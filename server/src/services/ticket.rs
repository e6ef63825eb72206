//! Ticket service — CRUD, role-scoped visibility, and dashboard stats.
//!
//! DESIGN
//! ======
//! Every operation takes a [`TicketScope`] naming the caller and their
//! role; visibility and edit rules are enforced here, not in the routes.
//! Requesters see only tickets they created or are assigned to; moderator
//! rank and above see everything.
//!
//! ERROR HANDLING
//! ==============
//! Authorization failures are `Forbidden`, lookups that the caller may not
//! know exist still return `NotFound` only after the visibility check, and
//! enum columns that fail to parse surface as `InvalidField` rather than
//! flowing onward.

use domain::role::Role;
use domain::ticket::{TicketPriority, TicketStatus};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("ticket not found: {0}")]
    NotFound(Uuid),
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    #[error("invalid ticket: {0}")]
    Invalid(&'static str),
    #[error("invalid ticket field {field}: {value}")]
    InvalidField { field: &'static str, value: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Identity on whose behalf a ticket operation runs.
#[derive(Debug, Clone, Copy)]
pub struct TicketScope {
    pub user_id: Uuid,
    pub role: Role,
}

impl TicketScope {
    /// Staff (moderator+) see and triage all tickets.
    #[must_use]
    pub fn is_staff(self) -> bool {
        self.role.satisfies(Role::Moderator)
    }
}

/// Ticket row with requester/assignee display names resolved.
#[derive(Debug, Clone)]
pub struct TicketRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub requester: String,
    pub assignee: Option<String>,
    /// `YYYY-MM-DD HH24:MI` timestamps.
    pub created_at: String,
    pub updated_at: String,
}

/// Field changes for a ticket update. `assigned_to` distinguishes "leave
/// alone" (`None`) from "unassign" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    pub assigned_to: Option<Option<Uuid>>,
}

/// Ticket counts by status, scoped like the list endpoint.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct TicketStats {
    pub open: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub closed: i64,
    pub total: i64,
}

// =============================================================================
// PURE RULES
// =============================================================================

pub(crate) fn validate_title(title: &str) -> Result<(), TicketError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TicketError::Invalid("title must not be empty"));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(TicketError::Invalid("title too long"));
    }
    Ok(())
}

pub(crate) fn validate_description(description: &str) -> Result<(), TicketError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TicketError::Invalid("description too long"));
    }
    Ok(())
}

/// Whether `scope` may see a ticket created by `created_by` and assigned
/// to `assigned_to`.
pub(crate) fn can_view(scope: TicketScope, created_by: Uuid, assigned_to: Option<Uuid>) -> bool {
    scope.is_staff() || scope.user_id == created_by || assigned_to == Some(scope.user_id)
}

/// Authorization rules for a patch. Requesters may edit the descriptive
/// fields of their own tickets; status and assignment are staff actions.
pub(crate) fn authorize_patch(scope: TicketScope, is_owner: bool, patch: &TicketPatch) -> Result<(), TicketError> {
    let edits_fields = patch.title.is_some() || patch.description.is_some() || patch.priority.is_some();
    if edits_fields && !(is_owner || scope.is_staff()) {
        return Err(TicketError::Forbidden("only the requester or staff may edit ticket fields"));
    }
    if (patch.status.is_some() || patch.assigned_to.is_some()) && !scope.is_staff() {
        return Err(TicketError::Forbidden("status and assignment changes require moderator access"));
    }
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(description) = &patch.description {
        validate_description(description)?;
    }
    Ok(())
}

// =============================================================================
// QUERIES
// =============================================================================

const TICKET_SELECT: &str = r"SELECT t.id, t.title, t.description, t.status, t.priority,
           t.created_by, t.assigned_to,
           c.email AS requester_email, c.first_name AS requester_first, c.last_name AS requester_last,
           a.email AS assignee_email, a.first_name AS assignee_first, a.last_name AS assignee_last,
           to_char(t.created_at, 'YYYY-MM-DD HH24:MI') AS created_at,
           to_char(t.updated_at, 'YYYY-MM-DD HH24:MI') AS updated_at
      FROM tickets t
      JOIN users c ON c.id = t.created_by
      LEFT JOIN users a ON a.id = t.assigned_to";

fn ticket_from_row(row: &PgRow) -> Result<TicketRow, TicketError> {
    let status_name: String = row.get("status");
    let status = TicketStatus::from_name(&status_name)
        .ok_or(TicketError::InvalidField { field: "status", value: status_name })?;
    let priority_name: String = row.get("priority");
    let priority = TicketPriority::from_name(&priority_name)
        .ok_or(TicketError::InvalidField { field: "priority", value: priority_name })?;

    let requester_email: String = row.get("requester_email");
    let requester_first: Option<String> = row.get("requester_first");
    let requester_last: Option<String> = row.get("requester_last");
    let requester =
        domain::user::display_name(requester_first.as_deref(), requester_last.as_deref(), &requester_email);

    let assignee_email: Option<String> = row.get("assignee_email");
    let assignee = assignee_email.map(|email| {
        let first: Option<String> = row.get("assignee_first");
        let last: Option<String> = row.get("assignee_last");
        domain::user::display_name(first.as_deref(), last.as_deref(), &email)
    });

    Ok(TicketRow {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        status,
        priority,
        created_by: row.get("created_by"),
        assigned_to: row.get("assigned_to"),
        requester,
        assignee,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// List tickets visible to the caller, newest first.
pub async fn list_tickets(pool: &PgPool, scope: TicketScope) -> Result<Vec<TicketRow>, TicketError> {
    let rows = if scope.is_staff() {
        sqlx::query(&format!("{TICKET_SELECT} ORDER BY t.created_at DESC"))
            .fetch_all(pool)
            .await?
    } else {
        sqlx::query(&format!(
            "{TICKET_SELECT} WHERE t.created_by = $1 OR t.assigned_to = $1 ORDER BY t.created_at DESC"
        ))
        .bind(scope.user_id)
        .fetch_all(pool)
        .await?
    };

    rows.iter().map(ticket_from_row).collect()
}

/// Fetch one ticket, applying the visibility rule.
pub async fn get_ticket(pool: &PgPool, scope: TicketScope, ticket_id: Uuid) -> Result<TicketRow, TicketError> {
    let row = sqlx::query(&format!("{TICKET_SELECT} WHERE t.id = $1"))
        .bind(ticket_id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(TicketError::NotFound(ticket_id));
    };
    let ticket = ticket_from_row(&row)?;
    if !can_view(scope, ticket.created_by, ticket.assigned_to) {
        return Err(TicketError::Forbidden("not your ticket"));
    }
    Ok(ticket)
}

/// Create a ticket owned by the caller.
pub async fn create_ticket(
    pool: &PgPool,
    scope: TicketScope,
    title: &str,
    description: &str,
    priority: TicketPriority,
) -> Result<TicketRow, TicketError> {
    validate_title(title)?;
    validate_description(description)?;

    let row = sqlx::query(
        "INSERT INTO tickets (title, description, priority, created_by)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(title.trim())
    .bind(description)
    .bind(priority.as_str())
    .bind(scope.user_id)
    .fetch_one(pool)
    .await?;

    let ticket_id: Uuid = row.get("id");
    tracing::info!(%ticket_id, user_id = %scope.user_id, priority = %priority, "ticket created");
    get_ticket(pool, scope, ticket_id).await
}

/// Apply a patch to a ticket, enforcing the edit rules.
pub async fn update_ticket(
    pool: &PgPool,
    scope: TicketScope,
    ticket_id: Uuid,
    patch: TicketPatch,
) -> Result<TicketRow, TicketError> {
    let existing = get_ticket(pool, scope, ticket_id).await?;
    let is_owner = existing.created_by == scope.user_id;
    authorize_patch(scope, is_owner, &patch)?;

    let title = patch.title.as_deref().map_or(existing.title.as_str(), str::trim);
    let description = patch.description.as_deref().unwrap_or(&existing.description);
    let priority = patch.priority.unwrap_or(existing.priority);
    let status = patch.status.unwrap_or(existing.status);
    let assigned_to = patch.assigned_to.unwrap_or(existing.assigned_to);

    sqlx::query(
        "UPDATE tickets
         SET title = $2, description = $3, priority = $4, status = $5, assigned_to = $6, updated_at = now()
         WHERE id = $1",
    )
    .bind(ticket_id)
    .bind(title)
    .bind(description)
    .bind(priority.as_str())
    .bind(status.as_str())
    .bind(assigned_to)
    .execute(pool)
    .await?;

    tracing::info!(%ticket_id, user_id = %scope.user_id, status = %status, "ticket updated");
    get_ticket(pool, scope, ticket_id).await
}

/// Delete a ticket. Allowed for the requester and for admins.
pub async fn delete_ticket(pool: &PgPool, scope: TicketScope, ticket_id: Uuid) -> Result<(), TicketError> {
    let existing = get_ticket(pool, scope, ticket_id).await?;
    if existing.created_by != scope.user_id && !scope.role.satisfies(Role::Admin) {
        return Err(TicketError::Forbidden("only the requester or an admin may delete a ticket"));
    }

    sqlx::query("DELETE FROM tickets WHERE id = $1")
        .bind(ticket_id)
        .execute(pool)
        .await?;
    tracing::info!(%ticket_id, user_id = %scope.user_id, "ticket deleted");
    Ok(())
}

/// Count tickets by status, with the same visibility as the list.
pub async fn ticket_stats(pool: &PgPool, scope: TicketScope) -> Result<TicketStats, TicketError> {
    let rows: Vec<(String, i64)> = if scope.is_staff() {
        sqlx::query_as("SELECT status, count(*) FROM tickets GROUP BY status")
            .fetch_all(pool)
            .await?
    } else {
        sqlx::query_as(
            "SELECT status, count(*) FROM tickets WHERE created_by = $1 OR assigned_to = $1 GROUP BY status",
        )
        .bind(scope.user_id)
        .fetch_all(pool)
        .await?
    };

    Ok(fold_stats(&rows))
}

pub(crate) fn fold_stats(rows: &[(String, i64)]) -> TicketStats {
    let mut stats = TicketStats::default();
    for (name, count) in rows {
        stats.total += count;
        match TicketStatus::from_name(name) {
            Some(TicketStatus::Open) => stats.open += count,
            Some(TicketStatus::InProgress) => stats.in_progress += count,
            Some(TicketStatus::Resolved) => stats.resolved += count,
            Some(TicketStatus::Closed) => stats.closed += count,
            // Unknown status rows still count toward the total.
            None => {}
        }
    }
    stats
}

#[cfg(test)]
#[path = "ticket_test.rs"]
mod tests;
