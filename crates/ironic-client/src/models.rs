//! Ironic API models
//!
//! These models match the Ironic v1 REST API payloads.
//! See: ironic/api/controllers/v1/node.py and port.py

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a single-resource lookup.
///
/// Ironic answers 404 for unknown nodes; that answer is a normal result of
/// a lookup, so it is carried here rather than in [`crate::IronicError`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    /// Convert into an `Option`, dropping the distinction's name
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Node model matching the Ironic node resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Node {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub provision_state: String,
    #[serde(default)]
    pub target_provision_state: Option<String>,
    #[serde(default)]
    pub power_state: Option<String>,
    #[serde(default)]
    pub maintenance: bool,
    #[serde(default)]
    pub last_error: Option<String>,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub boot_interface: Option<String>,
    #[serde(default)]
    pub deploy_interface: Option<String>,
    /// BMC address and credentials
    #[serde(default)]
    pub driver_info: serde_json::Map<String, serde_json::Value>,
    /// Image and deploy settings for the instance
    #[serde(default)]
    pub instance_info: serde_json::Map<String, serde_json::Value>,
    /// Hardware properties (cpu, memory, root device hints)
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Port model matching the Ironic port resource
///
/// Every field is optional because list calls usually project a subset
/// of fields (e.g. only `node_uuid`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Port {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub node_uuid: Option<String>,
    #[serde(default)]
    pub pxe_enabled: Option<bool>,
}

/// Request body for creating a port
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CreatePortRequest {
    pub node_uuid: String,
    pub address: String,
    pub pxe_enabled: bool,
}

/// Result of validating one driver interface
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InterfaceValidation {
    /// `None` means the interface is not supported by the driver
    #[serde(default)]
    pub result: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl InterfaceValidation {
    pub fn passed(&self) -> bool {
        self.result.unwrap_or(false)
    }
}

/// Response of `GET /v1/nodes/{ident}/validate`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationResult {
    #[serde(default)]
    pub boot: InterfaceValidation,
    #[serde(default)]
    pub deploy: InterfaceValidation,
    /// Remaining interfaces (power, management, console, ...)
    #[serde(flatten)]
    pub others: BTreeMap<String, InterfaceValidation>,
}

/// Paged port collection as returned by `GET /v1/ports`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortCollection {
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_deserializes_with_missing_optionals() {
        let node: Node = serde_json::from_value(json!({
            "uuid": "1be26c0b-03f2-4d2e-ae87-c02d7f33c123",
            "provision_state": "manageable",
            "driver": "ipmi",
            "driver_info": {"ipmi_address": "10.0.0.5"}
        }))
        .unwrap();

        assert_eq!(node.name, None);
        assert_eq!(node.provision_state, "manageable");
        assert_eq!(node.driver_info["ipmi_address"], "10.0.0.5");
        assert!(node.instance_info.is_empty());
    }

    #[test]
    fn test_validation_result_keeps_other_interfaces() {
        let result: ValidationResult = serde_json::from_value(json!({
            "boot": {"result": false, "reason": "no image"},
            "deploy": {"result": true, "reason": null},
            "power": {"result": true},
            "rescue": {"result": null, "reason": "not supported"}
        }))
        .unwrap();

        assert!(!result.boot.passed());
        assert_eq!(result.boot.reason.as_deref(), Some("no image"));
        assert!(result.deploy.passed());
        assert!(result.others["power"].passed());
        assert!(!result.others["rescue"].passed());
    }

    #[test]
    fn test_lookup_into_option() {
        assert_eq!(Lookup::Found(3).into_option(), Some(3));
        assert_eq!(Lookup::<u8>::NotFound.into_option(), None);
    }
}
