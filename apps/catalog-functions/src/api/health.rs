//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Ready once MongoDB answers a ping
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> =
        vec![("mongodb", Box::pin(database::mongodb::ping(&state.db)))];

    run_health_checks(checks).await
}
