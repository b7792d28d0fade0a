//! HTTP routes for the auth endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{login, AuthState};

pub fn auth_routes(state: AuthState) -> Router {
    Router::new().route("/", post(login)).with_state(state)
}
