//! Shared domain model for the ticket system.
//!
//! This crate owns the vocabulary used by both `server` and `client`: the
//! role hierarchy, ticket status/priority enums, and display-name
//! resolution. Keeping these in one place guarantees the two sides agree on
//! role ranking and on the exact wire strings.

pub mod role;
pub mod ticket;
pub mod user;
