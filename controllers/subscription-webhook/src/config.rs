//! Webhook configuration, loaded from environment variables.

use crate::error::WebhookError;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:9443";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,
}

impl WebhookConfig {
    /// Load from `WEBHOOK_BIND_ADDRESS` (default `0.0.0.0:9443`)
    pub fn from_env() -> Result<Self, WebhookError> {
        Self::from_value(env::var("WEBHOOK_BIND_ADDRESS").ok())
    }

    fn from_value(bind_address: Option<String>) -> Result<Self, WebhookError> {
        let raw = bind_address.unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw.parse().map_err(|e| {
            WebhookError::Configuration(format!("invalid WEBHOOK_BIND_ADDRESS '{}': {}", raw, e))
        })?;

        Ok(Self { bind_address })
    }
}
