use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub const HEALTHY_MESSAGE: &str = "Server is healthy!";

/// Liveness only; does not touch the database.
pub async fn health_check() -> &'static str {
    HEALTHY_MESSAGE
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ready"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready"),
    }
}
