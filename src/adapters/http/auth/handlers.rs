//! HTTP handlers for the auth endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error_response;
use crate::application::handlers::{LoginCommand, LoginHandler};

use super::dto::{LoginRequest, LoginResponse};

#[derive(Clone)]
pub struct AuthState {
    handler: Arc<LoginHandler>,
}

impl AuthState {
    pub fn new(handler: Arc<LoginHandler>) -> Self {
        Self { handler }
    }
}

/// POST /api/auth - admin credential check
///
/// The response never distinguishes a wrong username from a wrong password.
/// No session is issued here; the dashboard keeps its own flag.
pub async fn login(State(state): State<AuthState>, Json(req): Json<LoginRequest>) -> Response {
    let cmd = LoginCommand {
        username: req.username,
        password: req.password,
    };

    match state.handler.handle(cmd).await {
        Ok(username) => (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                username,
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, body) = error_response(&e);
            (status, Json(body)).into_response()
        }
    }
}
