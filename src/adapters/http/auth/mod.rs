//! HTTP adapter for the admin login endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AuthState;
pub use routes::auth_routes;
