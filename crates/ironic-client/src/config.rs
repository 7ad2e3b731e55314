//! Client configuration
//!
//! Loaded from environment variables, the same way the controllers load
//! their settings.

use crate::error::IronicError;
use std::env;
use std::time::Duration;

/// Default Ironic API endpoint (the API listens on 6385)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:6385";

/// Default API microversion. `fields` needs 1.8, `pxe_enabled` needs 1.19.
pub const DEFAULT_API_VERSION: &str = "1.81";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How requests authenticate against Ironic
#[derive(Clone, PartialEq, Eq, Default)]
pub enum AuthConfig {
    /// Standalone Ironic in noauth mode
    #[default]
    None,
    /// HTTP basic auth (the usual setup next to a bare metal operator)
    Basic { username: String, password: String },
    /// Keystone token sent as `X-Auth-Token`
    Token(String),
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => write!(f, "None"),
            AuthConfig::Basic { username, .. } => write!(f, "Basic({username}, ***)"),
            AuthConfig::Token(_) => write!(f, "Token(***)"),
        }
    }
}

/// Ironic client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IronicConfig {
    /// Base URL, e.g. "http://ironic:6385"
    pub endpoint: String,
    /// Value of the `X-OpenStack-Ironic-API-Version` header
    pub api_version: String,
    pub auth: AuthConfig,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for IronicConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            auth: AuthConfig::None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl IronicConfig {
    /// Create a configuration for an endpoint with default settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// * `IRONIC_ENDPOINT` - base URL (default `http://localhost:6385`)
    /// * `IRONIC_API_VERSION` - microversion (default `1.81`)
    /// * `IRONIC_USERNAME` / `IRONIC_PASSWORD` - basic auth
    /// * `IRONIC_TOKEN` - token auth, used when no username is set
    /// * `IRONIC_TIMEOUT_SECS` - request timeout (default 30)
    pub fn from_env() -> Result<Self, IronicError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IronicError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("IRONIC_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let api_version =
            lookup("IRONIC_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let auth = match (lookup("IRONIC_USERNAME"), lookup("IRONIC_TOKEN")) {
            (Some(username), _) => {
                let password = lookup("IRONIC_PASSWORD").ok_or_else(|| {
                    IronicError::InvalidRequest(
                        "IRONIC_PASSWORD is required when IRONIC_USERNAME is set".to_string(),
                    )
                })?;
                AuthConfig::Basic { username, password }
            }
            (None, Some(token)) => AuthConfig::Token(token),
            (None, None) => AuthConfig::None,
        };

        let timeout = match lookup("IRONIC_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    IronicError::InvalidRequest(format!("invalid IRONIC_TIMEOUT_SECS '{}': {}", raw, e))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            endpoint,
            api_version,
            auth,
            timeout,
        })
    }
}
