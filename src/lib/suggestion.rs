use serde::Serialize;

use crate::lib::cost::CostRates;

/// A single cost-saving action, ranked by its estimated monthly impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub action: String,
    /// Estimated savings in dollars per month.
    pub impact: f64,
    pub reason: String,
    pub command: String,
    /// Confidence in percent. Not every check fills this in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
}

/// Keep the `limit` suggestions with the highest impact, best first.
///
/// Lists that already fit are returned untouched, in the order produced.
/// Equal impacts keep their relative order.
pub fn top_suggestions(mut all: Vec<Suggestion>, limit: usize) -> Vec<Suggestion> {
    if all.len() <= limit {
        return all;
    }

    all.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    all.truncate(limit);
    all
}

pub fn total_impact(suggestions: &[Suggestion]) -> f64 {
    suggestions.iter().map(|s| s.impact).sum()
}

/// Fixed suggestions shown by `--demo`, without touching a cluster.
///
/// Listed highest impact first, since short lists are not re-ranked.
pub fn demo_suggestions() -> Vec<Suggestion> {
    let rates = CostRates::default();

    vec![
        Suggestion {
            action: "Delete unused LoadBalancer dev/legacy-gateway".to_string(),
            impact: rates.estimate_load_balancer_savings(),
            reason: "LoadBalancer service has no ready endpoints".to_string(),
            command: "kubectl delete service legacy-gateway -n dev".to_string(),
            confidence: Some(90),
        },
        Suggestion {
            action: "Scale staging/analytics from 10 → 3 replicas".to_string(),
            impact: rates.estimate_replica_savings(10, 3, 0.5, 0.5),
            reason: "High replica count (10) for staging environment".to_string(),
            command: "kubectl scale deployment analytics -n staging --replicas=3".to_string(),
            confidence: None,
        },
        Suggestion {
            action: "Shrink volume testing/postgres-data from 500Gi → 100Gi".to_string(),
            impact: rates.estimate_storage_savings(500, 100),
            reason: "Volume is provisioned far beyond the database size".to_string(),
            command: "kubectl edit pvc postgres-data -n testing".to_string(),
            confidence: Some(70),
        },
    ]
}
