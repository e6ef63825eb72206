pub mod admin;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod moderator_new;
pub mod moderators;
pub mod permission_denied;
pub mod signup;
pub mod ticket_detail;
pub mod ticket_new;
pub mod tickets;
