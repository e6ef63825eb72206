pub mod access_gate;
pub mod breadcrumbs;
pub mod navbar;
pub mod ticket_card;
