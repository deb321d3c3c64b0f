// --- File: crates/services/offersign_backend/src/auth.rs ---

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use constant_time_eq::constant_time_eq; // For secure string comparison
use offersign_config::AppConfig;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Header inbound callers use to present the shared agent secret.
pub const AGENT_AUTH_HEADER: &str = "x-agent-auth";

// The state this auth middleware has access to. It needs the AppConfig to
// get the shared secret.
#[derive(Clone)]
pub struct AgentAuthState {
    pub config: Arc<AppConfig>,
}

/// Axum middleware authenticating every inbound request, the health check
/// included. Checks the `x-agent-auth` header against the configured shared
/// secret.
pub async fn agent_auth_middleware(
    State(auth_state): State<Arc<AgentAuthState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(expected_secret) = auth_state
        .config
        .agent_auth
        .as_ref()
        .and_then(|auth| auth.shared_secret.as_deref())
    else {
        warn!("Agent shared secret not configured; rejecting request.");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Server configuration error" })),
        )
            .into_response();
    };

    let provided_secret = req
        .headers()
        .get(AGENT_AUTH_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided_secret {
        Some(provided) if constant_time_eq(provided.as_bytes(), expected_secret.as_bytes()) => {
            next.run(req).await
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response(),
    }
}
