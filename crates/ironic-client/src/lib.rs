//! OpenStack Ironic REST API Client
//!
//! A Rust client library for the parts of the Ironic bare metal API that
//! node provisioning depends on: node lookup, port listing and creation,
//! and node validation.
//!
//! # Example
//!
//! ```no_run
//! use ironic_client::{IronicClient, IronicClientTrait, IronicConfig, Lookup, PortListOpts};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client from IRONIC_* environment variables
//! let client = IronicClient::new(IronicConfig::from_env()?)?;
//!
//! // Look up a node by UUID or name
//! if let Lookup::Found(node) = client.get_node("worker-0").await? {
//!     println!("{} is {}", node.uuid, node.provision_state);
//! }
//!
//! // Find which node owns a MAC address
//! let ports = client
//!     .list_ports(&PortListOpts::by_address("aa:bb:cc:dd:ee:ff").fields(&["node_uuid"]))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Explicit lookups**: single-resource GETs return [`Lookup`], so a
//!   missing node is a value rather than an error variant to match on
//! - **Pagination**: list calls follow `next` links until exhausted
//! - **No retries**: every failure is returned to the caller as-is

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod ironic_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::IronicClient;
pub use common::query::PortListOpts;
pub use common::HttpClient;
pub use config::{AuthConfig, IronicConfig};
pub use error::IronicError;
pub use ironic_trait::IronicClientTrait;
pub use models::*;
#[cfg(feature = "test-util")]
pub use mock::MockIronicClient;
