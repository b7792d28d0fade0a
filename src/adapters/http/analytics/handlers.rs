//! HTTP handlers for the analytics endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error_response;
use crate::application::handlers::{GetAnalyticsHandler, GetAnalyticsQuery};
use crate::domain::analytics::Period;

use super::dto::AnalyticsParams;

#[derive(Clone)]
pub struct AnalyticsState {
    handler: Arc<GetAnalyticsHandler>,
}

impl AnalyticsState {
    pub fn new(handler: Arc<GetAnalyticsHandler>) -> Self {
        Self { handler }
    }
}

/// GET /api/analytics?period=day|week|month|all
pub async fn get_analytics(
    State(state): State<AnalyticsState>,
    Query(params): Query<AnalyticsParams>,
) -> Response {
    let period = params
        .period
        .as_deref()
        .map(Period::from_param)
        .unwrap_or_default();

    match state.handler.handle(GetAnalyticsQuery { period }).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            let (status, body) = error_response(&e);
            (status, Json(body)).into_response()
        }
    }
}
