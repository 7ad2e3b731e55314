//! Test utilities for unit testing node operations
//!
//! This module provides helpers for creating test data and setting up test scenarios.

#[cfg(test)]
use crate::resolver::NodeResolver;
#[cfg(test)]
use ironic_client::MockIronicClient;
#[cfg(test)]
use std::sync::Arc;

/// Helper to create a mock client and a resolver sharing it
#[cfg(test)]
pub fn setup() -> (MockIronicClient, NodeResolver) {
    let mock = MockIronicClient::new("http://test-ironic:6385");
    let resolver = NodeResolver::new(Arc::new(mock.clone()));
    (mock, resolver)
}

/// Helper to create a test node payload
#[cfg(test)]
pub fn test_node(uuid: &str, name: Option<&str>) -> ironic_client::Node {
    MockIronicClient::node(uuid, name)
}
