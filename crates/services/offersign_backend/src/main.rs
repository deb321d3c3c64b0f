// File: services/offersign_backend/src/main.rs
mod auth;

use axum::{middleware, routing::get, Router};
use offersign_config::load_config;
use offersign_docusign::routes as docusign_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::limit::GlobalConcurrencyLimitLayer;
use tracing::{error, info};

use auth::{agent_auth_middleware, AgentAuthState};

async fn health_handler() -> &'static str {
    "Offersign agent is running"
}

#[tokio::main]
async fn main() {
    offersign_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    // The key check must pass before the listener binds; a missing or
    // malformed key is fatal here, never mid-request.
    let private_key = match offersign_config::load_private_key() {
        Ok(key) => Arc::new(key),
        Err(err) => {
            error!("Refusing to start: {err}");
            std::process::exit(1);
        }
    };

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = Router::new()
        .route("/", get(health_handler))
        .merge(docusign_routes(config.clone(), private_key));

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use offersign_docusign::doc::DocusignApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        info!("Adding Swagger UI at /docs");
        app = app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", DocusignApiDoc::openapi()));
    }

    // Every route sits behind the shared-secret gate; the concurrency limit
    // bounds in-flight requests across the whole service.
    let auth_state = Arc::new(AgentAuthState {
        config: config.clone(),
    });
    let app = app
        .layer(middleware::from_fn_with_state(
            auth_state,
            agent_auth_middleware,
        ))
        .layer(GlobalConcurrencyLimitLayer::new(config.server.max_in_flight));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Offersign agent listening on http://{addr}");

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
