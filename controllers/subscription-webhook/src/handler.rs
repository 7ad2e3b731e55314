//! Admission review handling.
//!
//! Turns an `AdmissionReview` from the API server into a call to the
//! matching lifecycle hook and wraps the outcome back into a review.

use crate::error::WebhookError;
use crds::{AdmissionValidator, BMCEventSubscription};
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
use kube::core::DynamicObject;
use tracing::{debug, warn};

/// Answer an admission review for a BMCEventSubscription.
pub fn review(review: AdmissionReview<DynamicObject>) -> AdmissionReview<DynamicObject> {
    let request: AdmissionRequest<DynamicObject> = match review.try_into() {
        Ok(request) => request,
        Err(err) => {
            warn!("Rejecting malformed admission review: {}", err);
            return AdmissionResponse::invalid(err.to_string()).into_review();
        }
    };

    let response = AdmissionResponse::from(&request);
    match decide(&request) {
        Ok(()) => response.into_review(),
        Err(err) => {
            warn!(
                name = %request.name,
                namespace = request.namespace.as_deref().unwrap_or(""),
                operation = ?request.operation,
                "denied: {}", err
            );
            response.deny(err.to_string()).into_review()
        }
    }
}

/// Run the hook for the request's operation
fn decide(request: &AdmissionRequest<DynamicObject>) -> Result<(), WebhookError> {
    match request.operation {
        Operation::Create => {
            let subscription = decode(request.object.as_ref(), "object")?;
            subscription.validate_create()?;
        }
        Operation::Update => {
            let subscription = decode(request.object.as_ref(), "object")?;
            let old = decode(request.old_object.as_ref(), "oldObject")?;
            subscription.validate_update(&old)?;
        }
        Operation::Delete => {
            // Deletion is allowed even when oldObject is missing or unreadable
            if let Some(object) = request.old_object.as_ref() {
                match decode(Some(object), "oldObject") {
                    Ok(subscription) => subscription.validate_delete()?,
                    Err(err) => debug!(name = %request.name, "allowing delete of undecodable object: {}", err),
                }
            }
        }
        Operation::Connect => {}
    }
    Ok(())
}

fn decode(
    object: Option<&DynamicObject>,
    field: &'static str,
) -> Result<BMCEventSubscription, WebhookError> {
    let object = object.ok_or(WebhookError::MissingObject(field))?;
    Ok(serde_json::from_value(serde_json::to_value(object)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn subscription(host_name: &str, destination: &str) -> Value {
        json!({
            "apiVersion": "metal3.io/v1alpha1",
            "kind": "BMCEventSubscription",
            "metadata": {"name": "worker-0-events", "namespace": "metal3"},
            "spec": {"hostName": host_name, "destination": destination}
        })
    }

    fn admission_review(operation: &str, object: Option<Value>, old_object: Option<Value>) -> AdmissionReview<DynamicObject> {
        serde_json::from_value(json!({
            "apiVersion": "admission.k8s.io/v1",
            "kind": "AdmissionReview",
            "request": {
                "uid": "705ab4f5-6393-11e8-b7cc-42010a800002",
                "kind": {"group": "metal3.io", "version": "v1alpha1", "kind": "BMCEventSubscription"},
                "resource": {"group": "metal3.io", "version": "v1alpha1", "resource": "bmceventsubscriptions"},
                "name": "worker-0-events",
                "namespace": "metal3",
                "operation": operation,
                "userInfo": {"username": "admin"},
                "object": object,
                "oldObject": old_object,
                "dryRun": false
            }
        }))
        .unwrap()
    }

    fn response_of(review: AdmissionReview<DynamicObject>) -> Value {
        let value = serde_json::to_value(&review).unwrap();
        value["response"].clone()
    }

    #[test]
    fn test_create_valid_is_allowed() {
        let out = review(admission_review(
            "CREATE",
            Some(subscription("worker-0", "https://events.example.com/hooks")),
            None,
        ));
        let response = response_of(out);

        assert_eq!(response["allowed"], true);
        assert_eq!(response["uid"], "705ab4f5-6393-11e8-b7cc-42010a800002");
    }

    #[test]
    fn test_create_invalid_lists_violations() {
        let response = response_of(review(admission_review("CREATE", Some(subscription("", "")), None)));

        assert_eq!(response["allowed"], false);
        assert_eq!(
            response["status"]["message"],
            "[hostName cannot be empty, destination cannot be empty]"
        );
    }

    #[test]
    fn test_update_is_denied() {
        let object = subscription("worker-0", "https://events.example.com/hooks");
        let response = response_of(review(admission_review("UPDATE", Some(object.clone()), Some(object))));

        assert_eq!(response["allowed"], false);
        assert_eq!(
            response["status"]["message"],
            "subscriptions cannot be updated, please recreate it"
        );
    }

    #[test]
    fn test_delete_is_allowed() {
        let response = response_of(review(admission_review(
            "DELETE",
            None,
            Some(subscription("", "")),
        )));
        assert_eq!(response["allowed"], true);

        let response = response_of(review(admission_review("DELETE", None, None)));
        assert_eq!(response["allowed"], true);
    }

    #[test]
    fn test_delete_of_undecodable_object_is_allowed() {
        let old_object = json!({
            "apiVersion": "metal3.io/v1alpha1",
            "kind": "BMCEventSubscription",
            "metadata": {"name": "worker-0-events", "namespace": "metal3"}
        });

        let response = response_of(review(admission_review("DELETE", None, Some(old_object))));
        assert_eq!(response["allowed"], true);
    }

    #[test]
    fn test_create_without_object_is_denied() {
        let response = response_of(review(admission_review("CREATE", None, None)));

        assert_eq!(response["allowed"], false);
        assert_eq!(response["status"]["message"], "admission request has no object");
    }

    #[test]
    fn test_review_without_request_is_invalid() {
        let empty: AdmissionReview<DynamicObject> = serde_json::from_value(json!({
            "apiVersion": "admission.k8s.io/v1",
            "kind": "AdmissionReview"
        }))
        .unwrap();

        let response = response_of(review(empty));
        assert_eq!(response["allowed"], false);
    }
}
