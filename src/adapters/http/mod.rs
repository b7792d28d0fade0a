//! HTTP adapters - REST API implementations.
//!
//! Endpoints, matching the deployed wire contract:
//! - `POST /api/forms` - persist a wizard submission
//! - `GET /api/forms` - paginated dashboard listing
//! - `GET /api/analytics` - windowed aggregate counts
//! - `POST /api/auth` - admin credential check

pub mod analytics;
pub mod auth;
pub mod forms;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::domain::WizardError;

pub use analytics::AnalyticsState;
pub use auth::AuthState;
pub use forms::FormsState;

/// Wire error shape shared by every endpoint: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}

/// Map a wizard error to its response status. Client errors keep their
/// message; everything else collapses to a generic failure.
pub(crate) fn error_response(err: &WizardError) -> (StatusCode, ErrorBody) {
    match err {
        WizardError::MissingField { .. } | WizardError::MissingAnswer { .. } => {
            (StatusCode::BAD_REQUEST, ErrorBody::new(err.to_string()))
        }
        WizardError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            ErrorBody::new("Invalid credentials"),
        ),
        WizardError::UnknownPriority { .. } | WizardError::Database { .. } => {
            tracing::error!(error = %err, "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
        }
    }
}

/// Assemble the full API router.
pub fn api_router(
    forms: FormsState,
    analytics: AnalyticsState,
    auth: AuthState,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Backend API Running" }))
        .nest("/api/forms", forms::forms_routes(forms))
        .nest("/api/analytics", analytics::analytics_routes(analytics))
        .nest("/api/auth", auth::auth_routes(auth))
}
