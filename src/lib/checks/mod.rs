//! Waste checks run against a snapshot of cluster workloads.

pub mod replicas;

use log::info;

use crate::lib::cost::CostRates;
use crate::lib::suggestion::Suggestion;
use crate::lib::workload::WorkloadDescriptor;

pub use replicas::detect_replica_waste;

type Check = fn(&[WorkloadDescriptor], &CostRates) -> Vec<Suggestion>;

const CHECKS: &[(&str, Check)] = &[("replicas", detect_replica_waste)];

/// Run every check and collect their suggestions, in check order.
pub fn run_all_checks(workloads: &[WorkloadDescriptor], rates: &CostRates) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for (name, check) in CHECKS {
        let found = check(workloads, rates);
        info!(
            "Check '{}' produced {} suggestions from {} workloads",
            name,
            found.len(),
            workloads.len()
        );
        suggestions.extend(found);
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::quantity::NormalizedResources;

    #[test]
    fn collects_replica_suggestions() {
        let workloads = vec![
            WorkloadDescriptor::new(
                "dev",
                "api",
                Some(6),
                vec![NormalizedResources::from_requests("1", "2Gi")],
            ),
            WorkloadDescriptor::new(
                "prod",
                "api",
                Some(6),
                vec![NormalizedResources::from_requests("1", "2Gi")],
            ),
        ];

        let suggestions = run_all_checks(&workloads, &CostRates::default());
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].action.starts_with("Scale dev/api"));
    }
}
