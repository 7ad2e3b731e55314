//! Ironic API client
//!
//! Implements the subset of the Ironic v1 REST API used for provisioning:
//! /v1/nodes/{ident}, /v1/nodes/{ident}/validate and /v1/ports

use crate::common::query::{with_query, PortListOpts};
use crate::common::HttpClient;
use crate::config::IronicConfig;
use crate::error::IronicError;
use crate::ironic_trait::IronicClientTrait;
use crate::models::*;
use reqwest::Client;
use tracing::debug;

/// Ironic API client
pub struct IronicClient {
    http: HttpClient,
}

impl IronicClient {
    /// Create a new Ironic client
    ///
    /// # Arguments
    /// * `config` - endpoint, microversion, auth and timeout
    pub fn new(config: IronicConfig) -> Result<Self, IronicError> {
        if config.endpoint.is_empty() {
            return Err(IronicError::InvalidRequest("Ironic endpoint must not be empty".to_string()));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http: HttpClient::new(client, config.endpoint, config.api_version, config.auth),
        })
    }

    fn node_path(ident: &str) -> String {
        format!("/v1/nodes/{}", urlencoding::encode(ident))
    }
}

#[async_trait::async_trait]
impl IronicClientTrait for IronicClient {
    fn base_url(&self) -> &str {
        self.http.base_url()
    }

    async fn get_node(&self, ident: &str) -> Result<Lookup<Node>, IronicError> {
        debug!("Fetching node {} from Ironic", ident);

        match self.http.get::<Node>(&Self::node_path(ident)).await {
            Ok(node) => Ok(Lookup::Found(node)),
            Err(IronicError::NotFound(_)) => Ok(Lookup::NotFound),
            Err(e) => Err(e),
        }
    }

    async fn list_ports(&self, opts: &PortListOpts) -> Result<Vec<Port>, IronicError> {
        let path = with_query("/v1/ports", &opts.to_query_string());
        self.http.fetch_all_pages::<PortCollection>(&path).await
    }

    async fn create_port(&self, request: &CreatePortRequest) -> Result<Port, IronicError> {
        debug!("Creating port {} for node {}", request.address, request.node_uuid);
        self.http.post("/v1/ports", request).await
    }

    async fn validate_node(&self, ident: &str) -> Result<ValidationResult, IronicError> {
        debug!("Validating node {}", ident);
        self.http.get(&format!("{}/validate", Self::node_path(ident))).await
    }
}
