//! Operational HTTP endpoints.
//!
//! - `/`     : liveness
//! - `/info` : task-metadata report (plain text)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use skybook_core::error::Result;

use crate::app_state::AppState;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "I'm alive")
}

/// Two-line TaskARN/AvailabilityZone report. Failures surface as
/// `METADATA_UNAVAILABLE` (502) instead of taking the worker down.
pub async fn info(State(state): State<AppState>) -> Result<String> {
    let report = state.metadata().task_report().await?;
    tracing::info!(task_arn = %report.task_arn, az = %report.availability_zone, "info served");
    Ok(report.to_string())
}
