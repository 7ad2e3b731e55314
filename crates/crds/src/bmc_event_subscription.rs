//! BMCEventSubscription CRD
//!
//! Subscribes an external endpoint to events raised by a host's BMC.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "metal3.io",
    version = "v1alpha1",
    kind = "BMCEventSubscription",
    namespaced,
    status = "BMCEventSubscriptionStatus",
    printcolumn = r#"{"name":"Error", "type":"string", "jsonPath":".status.error"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct BMCEventSubscriptionSpec {
    /// Name of the host the subscription is for
    #[serde(default)]
    pub host_name: String,

    /// URL events are delivered to
    #[serde(default)]
    pub destination: String,

    /// Arbitrary user-provided context passed along with each event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Secret holding extra HTTP headers for event delivery
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "httpHeadersRef")]
    pub http_headers_ref: Option<SecretReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    /// Name of the Secret
    pub name: String,

    /// Namespace (defaults to same namespace as the subscription)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BMCEventSubscriptionStatus {
    /// ID of the subscription on the BMC
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "subscriptionID")]
    pub subscription_id: Option<String>,

    /// Error message if the subscription could not be created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
