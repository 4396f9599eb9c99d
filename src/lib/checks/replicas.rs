use log::debug;

use crate::lib::cost::CostRates;
use crate::lib::policy::ReplicaPolicy;
use crate::lib::suggestion::Suggestion;
use crate::lib::workload::WorkloadDescriptor;

/// Find workloads running more replicas than their environment warrants,
/// using the default rule tables.
pub fn detect_replica_waste(workloads: &[WorkloadDescriptor], rates: &CostRates) -> Vec<Suggestion> {
    ReplicaPolicy::default().detect_replica_waste(workloads, rates)
}

impl ReplicaPolicy {
    /// Find over-replicated workloads under this policy.
    ///
    /// A workload has to pass every gate independently to produce a
    /// suggestion; the rest are skipped silently.
    pub fn detect_replica_waste(
        &self,
        workloads: &[WorkloadDescriptor],
        rates: &CostRates,
    ) -> Vec<Suggestion> {
        workloads
            .iter()
            .filter_map(|workload| self.check_workload(workload, rates))
            .collect()
    }

    fn check_workload(&self, workload: &WorkloadDescriptor, rates: &CostRates) -> Option<Suggestion> {
        let namespace = workload.namespace.as_str();
        let name = workload.name.as_str();

        if self.is_system_namespace(namespace) {
            debug!("Skipping {namespace}/{name}: system namespace");
            return None;
        }

        let Some(current) = workload.current_replicas else {
            debug!("Skipping {namespace}/{name}: replica count not set");
            return None;
        };

        if current <= self.replica_floor {
            debug!("Skipping {namespace}/{name}: only {current} replicas");
            return None;
        }

        if self.is_production_namespace(namespace) {
            debug!("Skipping {namespace}/{name}: production namespace");
            return None;
        }

        let suggested = self.suggested_replicas(current);
        let pod = workload.pod_resources();
        let savings =
            rates.estimate_replica_savings(current, suggested, pod.cpu_cores, pod.memory_gb);

        if savings <= self.min_monthly_savings {
            debug!(
                "Skipping {namespace}/{name}: {current} → {suggested} replicas saves only ${savings:.0}/month"
            );
            return None;
        }

        debug!("Flagged {namespace}/{name}: {current} → {suggested} replicas, ${savings:.0}/month");

        Some(Suggestion {
            action: format!("Scale {namespace}/{name} from {current} → {suggested} replicas"),
            impact: savings,
            reason: format!(
                "High replica count ({current}) for {} environment",
                self.environment(namespace)
            ),
            command: format!("kubectl scale deployment {name} -n {namespace} --replicas={suggested}"),
            confidence: None,
        })
    }
}
