//! Webhook-specific error types.
//!
//! This module defines error types specific to the subscription webhook
//! that are not covered by upstream library errors.

use crds::AdmissionError;
use thiserror::Error;

/// Errors that can occur in the subscription webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Listener or server failure
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    /// The review lacks the object the operation needs
    #[error("admission request has no {0}")]
    MissingObject(&'static str),

    /// The object in the review is not a valid BMCEventSubscription
    #[error("failed to decode BMCEventSubscription: {0}")]
    Decode(#[from] serde_json::Error),

    /// The admission rules denied the mutation
    #[error("{0}")]
    Denied(#[from] AdmissionError),
}
