//! HTTP handlers for the forms endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error_response;
use crate::application::handlers::{
    ListFormsHandler, ListFormsQuery, SubmitFormHandler,
};

use super::dto::{ListFormsParams, ListFormsResponse, SubmitFormRequest, SubmitFormResponse};

#[derive(Clone)]
pub struct FormsState {
    submit_handler: Arc<SubmitFormHandler>,
    list_handler: Arc<ListFormsHandler>,
}

impl FormsState {
    pub fn new(submit_handler: Arc<SubmitFormHandler>, list_handler: Arc<ListFormsHandler>) -> Self {
        Self {
            submit_handler,
            list_handler,
        }
    }
}

/// POST /api/forms - persist a wizard submission
pub async fn submit_form(
    State(state): State<FormsState>,
    Json(req): Json<SubmitFormRequest>,
) -> Response {
    match state.submit_handler.handle(req.into()).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(SubmitFormResponse {
                success: true,
                id: id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, body) = error_response(&e);
            (status, Json(body)).into_response()
        }
    }
}

/// GET /api/forms?page=&limit= - paginated listing, newest first
pub async fn list_forms(
    State(state): State<FormsState>,
    Query(params): Query<ListFormsParams>,
) -> Response {
    let query = ListFormsQuery {
        page: params.page,
        limit: params.limit,
    };

    match state.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(ListFormsResponse::from(page))).into_response(),
        Err(e) => {
            let (status, body) = error_response(&e);
            (status, Json(body)).into_response()
        }
    }
}
