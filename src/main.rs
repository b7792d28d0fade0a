//! Goal Wizard server binary.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use goal_wizard::adapters::auth::ConfigAdminAuthenticator;
use goal_wizard::adapters::http::{api_router, AnalyticsState, AuthState, FormsState};
use goal_wizard::adapters::postgres::{PostgresAnalyticsReader, PostgresSubmissionRepository};
use goal_wizard::application::handlers::{
    GetAnalyticsHandler, ListFormsHandler, LoginHandler, SubmitFormHandler,
};
use goal_wizard::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    config.validate()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Adapters
    let repository = Arc::new(PostgresSubmissionRepository::new(pool.clone()));
    let analytics_reader = Arc::new(PostgresAnalyticsReader::new(pool));
    let authenticator = Arc::new(ConfigAdminAuthenticator::new(&config.admin));

    // Application handlers
    let forms = FormsState::new(
        Arc::new(SubmitFormHandler::new(repository.clone())),
        Arc::new(ListFormsHandler::new(repository)),
    );
    let analytics = AnalyticsState::new(Arc::new(GetAnalyticsHandler::new(analytics_reader)));
    let auth = AuthState::new(Arc::new(LoginHandler::new(authenticator)));

    let app = api_router(forms, analytics, auth)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "goal-wizard listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse::<http::HeaderValue>().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
