//! DCops CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for bare metal event
//! subscriptions, and the admission rules the webhook enforces for them.

pub mod admission;
pub mod bmc_event_subscription;

pub use admission::*;
pub use bmc_event_subscription::*;
