//! HTTP adapter for the dashboard analytics endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AnalyticsState;
pub use routes::analytics_routes;
