//! Admission rules for CRDs
//!
//! Synchronous allow/deny decisions taken before the API server persists a
//! resource. `Ok(())` allows the mutation, an error denies it and its
//! message is shown to the user.

use crate::bmc_event_subscription::BMCEventSubscription;
use kube::ResourceExt;
use std::fmt;
use thiserror::Error;
use tracing::info;
use url::Url;

/// Why a mutation was denied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// One or more fields are invalid; every violation is listed
    #[error("{}", Aggregate(.0))]
    Invalid(Vec<String>),

    /// The resource cannot be changed after creation
    #[error("subscriptions cannot be updated, please recreate it")]
    Immutable,
}

/// Renders violations the way the API server renders aggregated errors:
/// a single message as-is, several as `[a, b]`.
struct Aggregate<'a>(&'a [String]);

impl fmt::Display for Aggregate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [single] => write!(f, "{}", single),
            many => write!(f, "[{}]", many.join(", ")),
        }
    }
}

impl AdmissionError {
    /// Build an `Invalid` error from collected violations, or `Ok` if none
    pub fn from_violations(violations: Vec<String>) -> Result<(), AdmissionError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AdmissionError::Invalid(violations))
        }
    }
}

/// Lifecycle hooks the admission webhook calls for a resource kind
pub trait AdmissionValidator {
    /// Gate the transition absent -> present
    fn validate_create(&self) -> Result<(), AdmissionError>;

    /// Gate a change to an existing resource
    fn validate_update(&self, old: &Self) -> Result<(), AdmissionError>;

    /// Gate the transition present -> absent
    fn validate_delete(&self) -> Result<(), AdmissionError>;
}

impl BMCEventSubscription {
    /// Check the spec fields, collecting every violation
    pub fn validate_subscription(&self) -> Vec<String> {
        let mut errs = Vec::new();

        if self.spec.host_name.is_empty() {
            errs.push("hostName cannot be empty".to_string());
        }

        if self.spec.destination.is_empty() {
            errs.push("destination cannot be empty".to_string());
        } else if let Err(e) = validate_destination(&self.spec.destination) {
            errs.push(e);
        }

        if let Some(headers_ref) = &self.spec.http_headers_ref {
            let own_namespace = self.namespace();
            let ref_namespace = headers_ref.namespace.clone().or_else(|| own_namespace.clone());
            if ref_namespace != own_namespace {
                errs.push(
                    "http headers referenced secret must be in the same namespace as the BMCEventSubscription"
                        .to_string(),
                );
            }
        }

        errs
    }
}

impl AdmissionValidator for BMCEventSubscription {
    fn validate_create(&self) -> Result<(), AdmissionError> {
        info!(name = %self.name_any(), "validate create");
        AdmissionError::from_violations(self.validate_subscription())
    }

    fn validate_update(&self, _old: &Self) -> Result<(), AdmissionError> {
        info!(name = %self.name_any(), "validate update");
        Err(AdmissionError::Immutable)
    }

    fn validate_delete(&self) -> Result<(), AdmissionError> {
        Ok(())
    }
}

/// The destination must be an absolute URL with a host, and a URL that is
/// only a host must end with a slash.
fn validate_destination(destination: &str) -> Result<(), String> {
    let url = Url::parse(destination).map_err(|e| format!("destination is invalid: {}", e))?;

    if url.host_str().is_none() {
        return Err(format!("destination is invalid: {} has no host", destination));
    }

    if !has_explicit_path(destination) {
        return Err("hostname-only destination must have a trailing slash".to_string());
    }

    Ok(())
}

/// Whether the raw URL spells out a path after the authority.
///
/// `Url` normalizes `http://host` to `http://host/`, so this looks at the
/// original text.
fn has_explicit_path(raw: &str) -> bool {
    let Some((_, rest)) = raw.split_once("://") else {
        return false;
    };
    match rest.find(&['/', '?', '#'][..]) {
        Some(idx) => rest[idx..].starts_with('/'),
        None => false,
    }
}
