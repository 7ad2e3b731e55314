//! Node resolution
//!
//! Finds an Ironic node by UUID, by one of several candidate names, or by
//! the MAC address of one of its ports.

use crate::error::ProvisionerError;
use crate::node::Node;
use ironic_client::{IronicClientTrait, Lookup, PortListOpts};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves node identities against Ironic.
///
/// Holds no state besides the client, so one resolver can be shared by
/// any number of tasks.
#[derive(Clone)]
pub struct NodeResolver {
    client: Arc<dyn IronicClientTrait>,
}

impl NodeResolver {
    pub fn new(client: Arc<dyn IronicClientTrait>) -> Self {
        Self { client }
    }

    /// Get a node by its ID (Ironic also accepts a name here).
    ///
    /// Returns `Ok(None)` for an empty ID, without calling Ironic, and when
    /// Ironic reports the node as missing.
    pub async fn get_node(&self, id: &str) -> Result<Option<Node>, ProvisionerError> {
        if id.is_empty() {
            return Ok(None);
        }

        match self.client.get_node(id).await {
            Ok(Lookup::Found(payload)) => {
                debug!(node_id = %id, "found existing node by ID");
                Ok(Some(Node::new(payload, Arc::clone(&self.client))))
            }
            Ok(Lookup::NotFound) => Ok(None),
            Err(source) => Err(ProvisionerError::NodeLookup {
                id: id.to_string(),
                source,
            }),
        }
    }

    /// Get a node by its ID and fail if it does not exist.
    pub async fn assert_node(&self, id: &str) -> Result<Node, ProvisionerError> {
        self.get_node(id)
            .await?
            .ok_or_else(|| ProvisionerError::NodeNotFound { id: id.to_string() })
    }

    /// Find a node by one or more possible names.
    ///
    /// Names are tried in order and the first match is returned. Duplicates
    /// are not checked: if two nodes answer to different candidates, the
    /// earlier candidate wins and the other node is never looked at.
    pub async fn find_node_by_names<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Option<Node>, ProvisionerError> {
        for name in names {
            let name = name.as_ref();
            debug!(name = %name, "looking for existing node by name");

            let node = self
                .get_node(name)
                .await
                .map_err(|e| ProvisionerError::NameLookup {
                    name: name.to_string(),
                    source: Box::new(e),
                })?;

            if let Some(node) = node {
                debug!(name = %name, "found existing node by name");
                return Ok(Some(node));
            }

            info!("node with name {} doesn't exist", name);
        }

        Ok(None)
    }

    /// Find a node by the MAC address of one of its ports.
    pub async fn find_node_by_mac(&self, mac: &str) -> Result<Option<Node>, ProvisionerError> {
        match self.find_node_id_by_mac(mac).await? {
            Some(node_id) => self.get_node(&node_id).await,
            None => Ok(None),
        }
    }

    /// Owning node UUID of the port with this MAC, if any.
    async fn find_node_id_by_mac(&self, mac: &str) -> Result<Option<String>, ProvisionerError> {
        let opts = PortListOpts::by_address(mac).fields(&["node_uuid"]);

        let ports = self
            .client
            .list_ports(&opts)
            .await
            .map_err(|source| ProvisionerError::PortLookup {
                mac: mac.to_string(),
                source,
            })?;

        // MAC addresses are unique in Ironic, so at most one port matches.
        Ok(ports
            .into_iter()
            .next()
            .and_then(|port| port.node_uuid)
            .filter(|id| !id.is_empty()))
    }
}
