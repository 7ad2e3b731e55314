//! Provisioner error types.
//!
//! Every variant carries the identifier the caller asked about, so a log
//! line is enough to know which node or MAC was involved.

use ironic_client::IronicError;
use thiserror::Error;

/// Errors that can occur while resolving or preparing a node.
#[derive(Debug, Error)]
pub enum ProvisionerError {
    /// Node lookup by ID failed for a reason other than "not found"
    #[error("failed to find node by ID {id}: {source}")]
    NodeLookup {
        id: String,
        #[source]
        source: IronicError,
    },

    /// Node was required but does not exist
    #[error("failed to find node by ID {id}: not found")]
    NodeNotFound { id: String },

    /// A candidate name could not be looked up
    #[error("failed to find node by name {name}: {source}")]
    NameLookup {
        name: String,
        #[source]
        source: Box<ProvisionerError>,
    },

    /// Port index query by MAC address failed
    #[error("failed to find port with MAC address {mac}: {source}")]
    PortLookup {
        mac: String,
        #[source]
        source: IronicError,
    },

    /// Port creation was rejected or failed
    #[error("failed to create ironic port {mac} for node {node_id}: {source}")]
    PortCreate {
        mac: String,
        node_id: String,
        #[source]
        source: IronicError,
    },

    /// Paging over a node's ports failed
    #[error("failed to page over list of ports: {source}")]
    PortList {
        #[source]
        source: IronicError,
    },
}

impl ProvisionerError {
    /// The Ironic error at the bottom of the chain, if any
    pub fn ironic_error(&self) -> Option<&IronicError> {
        match self {
            ProvisionerError::NodeLookup { source, .. }
            | ProvisionerError::PortLookup { source, .. }
            | ProvisionerError::PortCreate { source, .. }
            | ProvisionerError::PortList { source } => Some(source),
            ProvisionerError::NameLookup { source, .. } => source.ironic_error(),
            ProvisionerError::NodeNotFound { .. } => None,
        }
    }
}
