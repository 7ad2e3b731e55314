//! HTTP server for the admission webhook and its probes.

use crate::config::WebhookConfig;
use crate::error::WebhookError;
use crate::handler;
use axum::routing::{get, post};
use axum::{Json, Router};
use kube::core::admission::AdmissionReview;
use kube::core::DynamicObject;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Path the ValidatingWebhookConfiguration points at
pub const VALIDATE_PATH: &str = "/validate-metal3-io-v1alpha1-bmceventsubscription";

/// Build the webhook router
pub fn router() -> Router {
    Router::new()
        .route(VALIDATE_PATH, post(validate))
        .route("/healthz", get(probe))
        .route("/readyz", get(probe))
        .layer(TraceLayer::new_for_http())
}

async fn validate(
    Json(review): Json<AdmissionReview<DynamicObject>>,
) -> Json<AdmissionReview<DynamicObject>> {
    Json(handler::review(review))
}

async fn probe() -> &'static str {
    "ok"
}

/// Serve until ctrl-c
pub async fn serve(config: &WebhookConfig) -> Result<(), WebhookError> {
    let listener = TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c, shutdown signal disabled: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
