//! BMCEventSubscription Admission Webhook
//!
//! Validating webhook the API server calls before persisting a
//! `BMCEventSubscription`:
//! - CREATE: allowed only if the spec is valid
//! - UPDATE: always denied, subscriptions are immutable
//! - DELETE: always allowed
//!
//! TLS is terminated in front of this process.

mod config;
mod error;
mod handler;
mod server;

use anyhow::{Context, Result};
use config::WebhookConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting BMCEventSubscription admission webhook");

    let config = WebhookConfig::from_env().context("failed to load webhook configuration")?;

    info!("Configuration:");
    info!("  Bind address: {}", config.bind_address);

    server::serve(&config).await.context("webhook server failed")?;

    Ok(())
}
