//! IronicClient trait for mocking
//!
//! This trait abstracts the IronicClient to enable mocking in unit tests.
//! The concrete IronicClient implements this trait, and tests can use mock implementations.

use crate::common::query::PortListOpts;
use crate::error::IronicError;
use crate::models::*;

/// Trait for Ironic API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
/// Implementations must not cache: every call reflects Ironic's current state.
#[async_trait::async_trait]
pub trait IronicClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Get a node by UUID or name. A missing node is `Lookup::NotFound`.
    async fn get_node(&self, ident: &str) -> Result<Lookup<Node>, IronicError>;

    /// List ports matching the filters, paging to exhaustion
    async fn list_ports(&self, opts: &PortListOpts) -> Result<Vec<Port>, IronicError>;

    /// Create a port
    async fn create_port(&self, request: &CreatePortRequest) -> Result<Port, IronicError>;

    /// Run the driver interface validation for a node
    async fn validate_node(&self, ident: &str) -> Result<ValidationResult, IronicError>;
}
