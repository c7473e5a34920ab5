use axum::{extract::Extension, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
    service: &'static str,
    time: String,
}

/// Health check endpoint
///
/// Liveness only: the provider is not contacted.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: state.deps.service_name,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
