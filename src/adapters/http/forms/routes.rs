//! HTTP routes for the forms endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_forms, submit_form, FormsState};

pub fn forms_routes(state: FormsState) -> Router {
    Router::new()
        .route("/", post(submit_form))
        .route("/", get(list_forms))
        .with_state(state)
}
