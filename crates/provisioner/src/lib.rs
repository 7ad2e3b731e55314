//! Bare-metal node provisioning primitives
//!
//! Resolves an Ironic node from whatever identifier is at hand (UUID, name
//! or MAC address), registers PXE boot ports for it and checks whether its
//! boot and deploy configuration is ready.
//!
//! ```no_run
//! use std::sync::Arc;
//! use ironic_client::{IronicClient, IronicConfig};
//! use provisioner::NodeResolver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(IronicClient::new(IronicConfig::from_env()?)?);
//! let resolver = NodeResolver::new(client);
//!
//! if let Some(node) = resolver.find_node_by_mac("aa:bb:cc:dd:ee:ff").await? {
//!     let failures = node.validate().await?;
//!     if failures.is_empty() && !node.has_ports().await? {
//!         node.create_boot_port("aa:bb:cc:dd:ee:ff").await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Nothing here retries, backs off or caches. Every call goes to Ironic and
//! every failure is handed back to the caller.

pub mod error;
pub mod node;
pub mod ports;
pub mod resolver;
pub mod validation;

mod resolver_test;
mod test_utils;

pub use error::ProvisionerError;
pub use node::Node;
pub use resolver::NodeResolver;
