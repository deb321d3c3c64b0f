// --- File: crates/offersign_docusign/src/routes.rs ---

use crate::handlers::{send_offer_handler, DocusignState};
use axum::{routing::post, Router};
use offersign_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the DocuSign feature.
pub fn routes(config: Arc<AppConfig>, private_key: Arc<String>) -> Router {
    let docusign_state = Arc::new(DocusignState {
        config,
        private_key,
    });

    Router::new()
        .route("/send-offer", post(send_offer_handler))
        .with_state(docusign_state)
}
