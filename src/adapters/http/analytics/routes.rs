//! HTTP routes for the analytics endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_analytics, AnalyticsState};

pub fn analytics_routes(state: AnalyticsState) -> Router {
    Router::new()
        .route("/", get(get_analytics))
        .with_state(state)
}
