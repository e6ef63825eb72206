pub mod breadcrumbs;
pub mod gate;
