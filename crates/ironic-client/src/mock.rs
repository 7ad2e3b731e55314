//! Mock IronicClient for unit testing
//!
//! This module provides a mock implementation of IronicClientTrait that can be used
//! in unit tests without requiring a running Ironic instance.

use crate::common::query::PortListOpts;
use crate::error::IronicError;
use crate::ironic_trait::IronicClientTrait;
use crate::models::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock IronicClient for testing
///
/// This mock stores nodes and ports in memory, records every call it
/// receives, and can be told to fail specific calls.
#[derive(Clone, Default)]
pub struct MockIronicClient {
    base_url: String,
    // In-memory storage for resources
    nodes: Arc<Mutex<Vec<Node>>>,
    ports: Arc<Mutex<Vec<Port>>>,
    validations: Arc<Mutex<HashMap<String, ValidationResult>>>,
    // Failure injection
    node_failures: Arc<Mutex<HashMap<String, String>>>,
    list_ports_failure: Arc<Mutex<Option<String>>>,
    create_port_failure: Arc<Mutex<Option<String>>>,
    validate_failure: Arc<Mutex<Option<String>>>,
    // Every call, in order, e.g. "get_node:worker-0"
    calls: Arc<Mutex<Vec<String>>>,
    // Counter for generating port UUIDs
    next_id: Arc<Mutex<u64>>,
}

impl MockIronicClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            next_id: Arc::new(Mutex::new(1)),
            ..Default::default()
        }
    }

    /// Build a minimal node (for test setup)
    pub fn node(uuid: &str, name: Option<&str>) -> Node {
        Node {
            uuid: uuid.to_string(),
            name: name.map(|n| n.to_string()),
            provision_state: "manageable".to_string(),
            target_provision_state: None,
            power_state: Some("power off".to_string()),
            maintenance: false,
            last_error: None,
            driver: "ipmi".to_string(),
            boot_interface: None,
            deploy_interface: None,
            driver_info: serde_json::Map::new(),
            instance_info: serde_json::Map::new(),
            properties: serde_json::Map::new(),
        }
    }

    /// Add a node to the mock store (for test setup)
    pub fn add_node(&self, node: Node) {
        self.nodes.lock().unwrap().push(node);
    }

    /// Add a port to the mock store (for test setup)
    pub fn add_port(&self, node_uuid: &str, address: &str) {
        self.ports.lock().unwrap().push(Port {
            uuid: Some(format!("port-{}", self.next_id())),
            address: Some(address.to_string()),
            node_uuid: Some(node_uuid.to_string()),
            pxe_enabled: Some(true),
        });
    }

    /// Set the validation answer for a node UUID (for test setup)
    pub fn set_validation(&self, node_uuid: &str, result: ValidationResult) {
        self.validations
            .lock()
            .unwrap()
            .insert(node_uuid.to_string(), result);
    }

    /// Make `get_node(ident)` fail with an API error
    pub fn fail_get_node(&self, ident: &str, message: &str) {
        self.node_failures
            .lock()
            .unwrap()
            .insert(ident.to_string(), message.to_string());
    }

    /// Make every `list_ports` call fail
    pub fn fail_list_ports(&self, message: &str) {
        *self.list_ports_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Make every `create_port` call fail
    pub fn fail_create_port(&self, message: &str) {
        *self.create_port_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Make every `validate_node` call fail
    pub fn fail_validate(&self, message: &str) {
        *self.validate_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Ports currently stored
    pub fn ports(&self) -> Vec<Port> {
        self.ports.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_id(&self) -> u64 {
        let mut id = self.next_id.lock().unwrap();
        let current = *id;
        *id += 1;
        current
    }

    fn api_error(message: &str) -> IronicError {
        IronicError::Api {
            status: 500,
            message: message.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl IronicClientTrait for MockIronicClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_node(&self, ident: &str) -> Result<Lookup<Node>, IronicError> {
        self.record(format!("get_node:{}", ident));

        if let Some(message) = self.node_failures.lock().unwrap().get(ident) {
            return Err(Self::api_error(message));
        }

        // Ironic resolves an ident as UUID first, then as name
        let nodes = self.nodes.lock().unwrap();
        let found = nodes
            .iter()
            .find(|n| n.uuid == ident)
            .or_else(|| nodes.iter().find(|n| n.name.as_deref() == Some(ident)));

        Ok(match found {
            Some(node) => Lookup::Found(node.clone()),
            None => Lookup::NotFound,
        })
    }

    async fn list_ports(&self, opts: &PortListOpts) -> Result<Vec<Port>, IronicError> {
        self.record(format!("list_ports:{}", opts.to_query_string()));

        if let Some(message) = self.list_ports_failure.lock().unwrap().as_deref() {
            return Err(Self::api_error(message));
        }

        let project = |port: &Port| -> Port {
            if opts.fields.is_empty() {
                return port.clone();
            }
            let keep = |field: &str| opts.fields.iter().any(|f| f == field);
            Port {
                uuid: port.uuid.clone().filter(|_| keep("uuid")),
                address: port.address.clone().filter(|_| keep("address")),
                node_uuid: port.node_uuid.clone().filter(|_| keep("node_uuid")),
                pxe_enabled: port.pxe_enabled.filter(|_| keep("pxe_enabled")),
            }
        };

        Ok(self
            .ports
            .lock()
            .unwrap()
            .iter()
            .filter(|p| opts.address.is_none() || p.address == opts.address)
            .filter(|p| opts.node_uuid.is_none() || p.node_uuid == opts.node_uuid)
            .map(project)
            .collect())
    }

    async fn create_port(&self, request: &CreatePortRequest) -> Result<Port, IronicError> {
        self.record(format!("create_port:{}:{}", request.node_uuid, request.address));

        if let Some(message) = self.create_port_failure.lock().unwrap().as_deref() {
            return Err(Self::api_error(message));
        }

        let mut ports = self.ports.lock().unwrap();
        if ports
            .iter()
            .any(|p| p.address.as_deref() == Some(request.address.as_str()))
        {
            return Err(IronicError::Api {
                status: 409,
                message: format!("A port with MAC address {} already exists.", request.address),
            });
        }

        let port = Port {
            uuid: Some(format!("port-{}", self.next_id())),
            address: Some(request.address.clone()),
            node_uuid: Some(request.node_uuid.clone()),
            pxe_enabled: Some(request.pxe_enabled),
        };
        ports.push(port.clone());
        Ok(port)
    }

    async fn validate_node(&self, ident: &str) -> Result<ValidationResult, IronicError> {
        self.record(format!("validate_node:{}", ident));

        if let Some(message) = self.validate_failure.lock().unwrap().as_deref() {
            return Err(Self::api_error(message));
        }

        self.validations
            .lock()
            .unwrap()
            .get(ident)
            .cloned()
            .ok_or_else(|| IronicError::NotFound(format!("Node {} could not be found", ident)))
    }
}
