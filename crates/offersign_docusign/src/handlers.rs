// --- File: crates/offersign_docusign/src/handlers.rs ---
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use offersign_common::{IntoHttpResponse, OffersignError};
use offersign_config::AppConfig;

use crate::logic::{send_offer, SendOfferRequest};

// --- State for DocuSign Handlers ---
// The private key is loaded and validated at startup and injected here so the
// request path never touches the process environment.
#[derive(Clone)]
pub struct DocusignState {
    pub config: Arc<AppConfig>,
    pub private_key: Arc<String>,
}

/// Axum handler to send an offer envelope for signature.
#[axum::debug_handler]
pub async fn send_offer_handler(
    State(state): State<Arc<DocusignState>>,
    Json(payload): Json<SendOfferRequest>,
) -> Response {
    let Some(docusign_config) = state.config.docusign.as_ref() else {
        error!("DocuSign configuration section missing in server config.");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "DocuSign configuration not loaded." })),
        )
            .into_response();
    };

    match send_offer(docusign_config, &state.private_key, payload).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            error!("Error sending envelope: {err}");
            OffersignError::from(err).into_http_response()
        }
    }
}
