//! HTTP adapter for form submission and listing.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FormsState;
pub use routes::forms_routes;
