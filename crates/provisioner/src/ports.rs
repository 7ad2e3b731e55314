//! Boot port registration for a node.

use crate::error::ProvisionerError;
use crate::node::Node;
use ironic_client::{CreatePortRequest, PortListOpts};
use tracing::info;

impl Node {
    /// Create a port with PXE booting enabled.
    ///
    /// Not idempotent: Ironic decides what happens when the MAC is already
    /// registered (it rejects duplicates with 409).
    pub async fn create_boot_port(&self, mac: &str) -> Result<(), ProvisionerError> {
        info!(node_uuid = %self.uuid(), mac = %mac, "creating PXE enabled ironic port for node");

        let request = CreatePortRequest {
            node_uuid: self.uuid().to_string(),
            address: mac.to_string(),
            pxe_enabled: true,
        };

        self.client()
            .create_port(&request)
            .await
            .map_err(|source| ProvisionerError::PortCreate {
                mac: mac.to_string(),
                node_id: self.uuid().to_string(),
                source,
            })?;

        Ok(())
    }

    /// Whether the node has any ports.
    pub async fn has_ports(&self) -> Result<bool, ProvisionerError> {
        let opts = PortListOpts::by_node(self.uuid()).fields(&["node_uuid"]);

        let ports = self
            .client()
            .list_ports(&opts)
            .await
            .map_err(|source| ProvisionerError::PortList { source })?;

        Ok(!ports.is_empty())
    }
}
