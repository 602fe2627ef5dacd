//! Mock Madrasati API, the target the student load test runs against.

pub mod assignments;
pub mod breaker;
pub mod error;
pub mod exam;
pub mod extractors;
pub mod handlers;
pub mod identity;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::config::ServerConfig;
use assignments::AssignmentService;
use exam::ExamService;
use identity::IdentityService;

pub struct AppState {
    pub identity: IdentityService,
    pub assignments: AssignmentService,
    pub exam: ExamService,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            identity: IdentityService::new(config.identity.clone()),
            assignments: AssignmentService::new(config.assignments.clone()),
            exam: ExamService::new(&config.exam),
        }
    }
}

pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .route("/api/assignments/submit", post(handlers::submit_assignment))
        .route("/api/exam/submit", post(handlers::submit_exam))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(Arc::new(AppState::new(config)))
}

/// Serve the mock API until Ctrl+C
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting mock Madrasati API");
    tracing::info!("  Bind: {}", config.bind);
    tracing::info!(
        "  Identity: {} retries, {}ms timeout, {:.0}% transient failures",
        config.identity.max_retries,
        config.identity.attempt_timeout_ms,
        config.identity.failure_rate * 100.0
    );
    tracing::info!(
        "  Exam: {:.0}% backend failures, breaker opens after {} for {}s",
        config.exam.failure_rate * 100.0,
        config.exam.failure_threshold,
        config.exam.open_duration_secs
    );

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    let app = router(&config);

    tracing::info!("Server ready at http://{}. Press Ctrl+C to stop.", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
