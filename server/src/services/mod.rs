//! Service layer: business logic over the database pool.
//!
//! Routes stay thin; each service exposes free functions over `&PgPool`
//! with a `thiserror` enum per domain.

pub mod account;
pub mod password;
pub mod session;
pub mod ticket;
