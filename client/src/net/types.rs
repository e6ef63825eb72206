//! Wire types mirroring the server's JSON payloads.
//!
//! The user's `role` stays a raw string here: the access gate ranks it
//! through the hierarchy table itself, so a role name the client does not
//! know fails closed instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use domain::role::Role;
use domain::ticket::{TicketPriority, TicketStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current user as returned by `/api/auth/me`, login, and signup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Raw role name; rank it via [`Role::rank_of`].
    pub role: String,
    /// Registration date, only present on admin listings.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Canonical display name (first+last > first > last > email prefix).
    #[must_use]
    pub fn display_name(&self) -> String {
        domain::user::display_name(self.first_name.as_deref(), self.last_name.as_deref(), &self.email)
    }

    /// Badge label for the role, falling back to the raw name for values
    /// outside the hierarchy.
    #[must_use]
    pub fn role_label(&self) -> String {
        Role::from_name(&self.role).map_or_else(|| self.role.clone(), |r| r.label().to_owned())
    }

    /// Whether this user's role meets `required` rank. Unknown roles never do.
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        Role::rank_of(&self.role).is_some_and(|rank| rank >= required.rank())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
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

#[derive(Clone, Debug, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
}

/// Patch payload for `PATCH /api/tickets/:id`. Omitted fields are left
/// alone; `assigned_to: Some(None)` serializes to an explicit `null`,
/// which unassigns.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Option<Uuid>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TicketStats {
    pub open: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub closed: i64,
    pub total: i64,
}

#[cfg(test)]
pub mod test_fixtures {
    use super::*;

    /// A user fixture with the given raw role name.
    #[must_use]
    pub fn user_with_role(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "fixture@example.com".to_owned(),
            first_name: Some("Fix".to_owned()),
            last_name: Some("Ture".to_owned()),
            role: role.to_owned(),
            created_at: None,
        }
    }
}
