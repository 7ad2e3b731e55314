//! Node readiness validation.

use crate::node::Node;
use ironic_client::IronicError;
use tracing::info;

impl Node {
    /// Validate boot and deploy information for the node.
    ///
    /// Validation failures are returned as a list of reasons, boot first.
    /// An empty list means the node is ready. A failure to run the
    /// validation call itself is returned as the bare [`IronicError`] so
    /// the caller can tell "Ironic is down" from "node is not ready".
    pub async fn validate(&self) -> Result<Vec<String>, IronicError> {
        info!(node_uuid = %self.uuid(), "validating node settings in ironic");

        let result = self.client().validate_node(self.uuid()).await?;

        let mut failures = Vec::new();
        for outcome in [&result.boot, &result.deploy] {
            if !outcome.passed() {
                failures.push(outcome.reason.clone().unwrap_or_default());
            }
        }

        Ok(failures)
    }
}
