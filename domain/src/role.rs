//! Role hierarchy.
//!
//! DESIGN
//! ======
//! Roles form a fixed total order: user < moderator < admin. A higher role
//! satisfies any requirement at or below its own rank. Role names on the
//! wire and in the database are exact lowercase strings; there is no case
//! folding and no synonym matching. A name outside the table has no rank,
//! and every access decision over an absent rank denies.

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Account role. Variant order defines the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular requester. Sees only their own tickets.
    User,
    /// Support staff. Sees all tickets, drives status and assignment.
    Moderator,
    /// Full access, including account management.
    Admin,
}

impl Role {
    /// Every role, lowest rank first.
    pub const ALL: [Self; 3] = [Self::User, Self::Moderator, Self::Admin];

    /// Canonical wire/database name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Parse an exact lowercase role name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "user" => Some(Self::User),
            "moderator" => Some(Self::Moderator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Position in the hierarchy: user(0) < moderator(1) < admin(2).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::User => 0,
            Self::Moderator => 1,
            Self::Admin => 2,
        }
    }

    /// Rank lookup over a raw role name.
    ///
    /// Unknown names yield `None`; callers must treat an absent rank as
    /// insufficient, never as a pass.
    #[must_use]
    pub fn rank_of(name: &str) -> Option<u8> {
        Self::from_name(name).map(Self::rank)
    }

    /// Whether this role meets a requirement of `required` or above.
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        self.rank() >= required.rank()
    }

    /// Human-facing label, e.g. for role badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Moderator => "Moderator",
            Self::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
