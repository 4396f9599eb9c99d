use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Container;

use crate::lib::quantity::NormalizedResources;

/// Namespace assumed for objects that do not name one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// A workload as seen by the waste checks.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadDescriptor {
    pub namespace: String,
    pub name: String,
    /// `None` when the replica count is left to an autoscaler or operator.
    pub current_replicas: Option<i32>,
    pub containers: Vec<NormalizedResources>,
}

impl WorkloadDescriptor {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        current_replicas: Option<i32>,
        containers: Vec<NormalizedResources>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            current_replicas,
            containers,
        }
    }

    pub fn from_deployment(deployment: &Deployment) -> Self {
        let name = deployment.metadata.name.clone().unwrap_or_default();
        let namespace = deployment
            .metadata
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let current_replicas = deployment.spec.as_ref().and_then(|spec| spec.replicas);

        let containers = deployment
            .spec
            .as_ref()
            .and_then(|spec| spec.template.spec.as_ref())
            .map(|pod| pod.containers.iter().map(container_requests).collect())
            .unwrap_or_default();

        Self {
            namespace,
            name,
            current_replicas,
            containers,
        }
    }

    /// Resources requested by one pod of this workload.
    pub fn pod_resources(&self) -> NormalizedResources {
        NormalizedResources::sum(&self.containers)
    }
}

fn container_requests(container: &Container) -> NormalizedResources {
    let requests = container
        .resources
        .as_ref()
        .and_then(|r| r.requests.as_ref());

    let cpu = requests
        .and_then(|req| req.get("cpu"))
        .map(|q| q.0.as_str())
        .unwrap_or_default();
    let memory = requests
        .and_then(|req| req.get("memory"))
        .map(|q| q.0.as_str())
        .unwrap_or_default();

    NormalizedResources::from_requests(cpu, memory)
}
