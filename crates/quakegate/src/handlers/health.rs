//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (pings the cache backend, if any)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the cache answers a ping or caching is disabled,
/// 503 with the failure reason otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let Some(cache) = state.cache else {
        return (
            StatusCode::OK,
            Json(serde_json::json!({ "healthy": true, "cache": "disabled" })),
        )
            .into_response();
    };

    match cache.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "healthy": true, "cache": "ok" })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Cache ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "healthy": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
