//! Prints the CRD manifests as YAML, for `kubectl apply -f -`.

use crds::BMCEventSubscription;
use kube::CustomResourceExt;

fn main() -> Result<(), serde_yaml::Error> {
    print!("{}", serde_yaml::to_string(&BMCEventSubscription::crd())?);
    Ok(())
}
