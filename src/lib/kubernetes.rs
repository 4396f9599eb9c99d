use k8s_openapi::api::apps::v1::Deployment;
use kube::{Api, Client, Config, api::ListParams, config::KubeConfigOptions};
use log::{debug, info};

use crate::{
    Config as SuggestConfig, KubernetesError::ApiError, KubernetesError::ConnectionFailed, Result,
    WorkloadDescriptor,
};

/// Deployments fetched per list request.
const PAGE_SIZE: u32 = 500;

pub struct KubernetesLoader {
    client: Client,
    config: SuggestConfig,
}

impl KubernetesLoader {
    pub async fn new(config: SuggestConfig) -> Result<Self> {
        let client = if let Some(ref context) = config.context {
            debug!("Using custom context for Kubeconfig");
            let custom_config = Config::from_kubeconfig(&KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            })
            .await
            .map_err(|e| ConnectionFailed(e.to_string()))?;

            debug!("Creating a Kubernetes client using custom Kubeconfig");
            Client::try_from(custom_config).map_err(|e| ConnectionFailed(e.to_string()))?
        } else {
            debug!("Creating a Kubernetes client using default Kubeconfig");
            Client::try_default()
                .await
                .map_err(|e| ConnectionFailed(e.to_string()))?
        };

        info!("Successfully created Kubernetes client");
        Ok(Self { client, config })
    }

    /// List every Deployment in scope as a workload descriptor.
    pub async fn get_workloads(&self) -> Result<Vec<WorkloadDescriptor>> {
        let api: Api<Deployment> = if let Some(namespace) = self.config.namespace.as_deref() {
            debug!("Listing deployments in {namespace} namespace");
            Api::namespaced(self.client.clone(), namespace)
        } else {
            debug!("Listing deployments in all namespaces");
            Api::all(self.client.clone())
        };

        let mut workloads = Vec::new();
        let mut lp = ListParams::default().limit(PAGE_SIZE);

        loop {
            let page = api.list(&lp).await.map_err(|e| ApiError(e.to_string()))?;
            debug!("Fetched page of {} deployments", page.items.len());

            workloads.extend(page.items.iter().map(WorkloadDescriptor::from_deployment));

            match page.metadata.continue_ {
                Some(token) if !token.is_empty() => {
                    lp = ListParams::default().limit(PAGE_SIZE).continue_token(&token);
                }
                _ => break,
            }
        }

        info!("Retrieved {} deployments", workloads.len());
        Ok(workloads)
    }
}
