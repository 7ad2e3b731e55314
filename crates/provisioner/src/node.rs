//! Node handle
//!
//! A fetched Ironic node together with the client used to act on it.

use ironic_client::IronicClientTrait;
use std::fmt;
use std::sync::Arc;

/// A node fetched from Ironic, plus the client that fetched it.
///
/// The payload is a snapshot taken at lookup time; it is never refreshed.
/// Port and validation operations live in [`crate::ports`] and
/// [`crate::validation`].
#[derive(Clone)]
pub struct Node {
    payload: ironic_client::Node,
    client: Arc<dyn IronicClientTrait>,
}

impl Node {
    pub fn new(payload: ironic_client::Node, client: Arc<dyn IronicClientTrait>) -> Self {
        Self { payload, client }
    }

    pub fn uuid(&self) -> &str {
        &self.payload.uuid
    }

    pub fn name(&self) -> Option<&str> {
        self.payload.name.as_deref()
    }

    pub fn provision_state(&self) -> &str {
        &self.payload.provision_state
    }

    /// The full Ironic payload, including driver and instance info
    pub fn payload(&self) -> &ironic_client::Node {
        &self.payload
    }

    pub fn into_payload(self) -> ironic_client::Node {
        self.payload
    }

    pub(crate) fn client(&self) -> &dyn IronicClientTrait {
        self.client.as_ref()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("payload", &self.payload)
            .field("ironic", &self.client.base_url())
            .finish()
    }
}
