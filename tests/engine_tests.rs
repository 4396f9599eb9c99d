//! End-to-end tests of the suggestion engine through the public API

use kube_suggest::{
    CostRates, NormalizedResources, ReplicaPolicy, WorkloadDescriptor, detect_replica_waste, parse_cpu,
    parse_memory, run_all_checks, top_suggestions,
};

fn workload(namespace: &str, name: &str, replicas: Option<i32>, cpu: &str, memory: &str) -> WorkloadDescriptor {
    WorkloadDescriptor::new(
        namespace,
        name,
        replicas,
        vec![NormalizedResources::from_requests(cpu, memory)],
    )
}

#[test]
fn test_normalization_defaults() {
    assert_eq!(parse_cpu(""), 0.1);
    assert_eq!(parse_memory(""), 0.128);
    assert_eq!(parse_cpu("500m"), 0.5);
    assert_eq!(parse_memory("1Gi"), 1.0);
    assert_eq!(parse_memory("512Mi"), 0.5);
}

#[test]
fn test_staging_analytics_scenario() {
    let workloads = vec![workload("staging", "analytics", Some(10), "500m", "512Mi")];

    let suggestions = detect_replica_waste(&workloads, &CostRates::default());

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].impact, 98.0);
    assert!(suggestions[0].action.contains("staging/analytics"));
    assert!(suggestions[0].action.contains("10 → 3"));
}

#[test]
fn test_production_namespace_scenario() {
    let workloads = vec![workload(
        "production-analytics",
        "analytics",
        Some(10),
        "500m",
        "512Mi",
    )];

    assert!(detect_replica_waste(&workloads, &CostRates::default()).is_empty());
}

#[test]
fn test_malformed_quantities_do_not_block_other_workloads() {
    let workloads = vec![
        workload("dev", "broken", Some(8), "lots", "???"),
        workload("dev", "api", Some(8), "2", "4Gi"),
    ];

    let suggestions = run_all_checks(&workloads, &CostRates::default());

    // "broken" costs only its memory fallback: 0.256GB * 0.004 * 720 * 6 ≈ $4
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].action.starts_with("Scale dev/api from 8 → 2"));
}

#[test]
fn test_ranked_cluster_report() {
    let workloads = vec![
        workload("kube-system", "coredns", Some(12), "1", "1Gi"),
        workload("dev", "small", Some(3), "1", "1Gi"),
        workload("staging", "big", Some(20), "2", "4Gi"),
        workload("qa-test", "medium", Some(6), "1", "2Gi"),
        workload("prod-eu", "checkout", Some(30), "4", "8Gi"),
        workload("sandbox", "tiny", Some(3), "10m", "16Mi"),
        workload("dev", "autoscaled", None, "4", "8Gi"),
    ];

    let all = run_all_checks(&workloads, &CostRates::default());
    let actions: Vec<&str> = all.iter().map(|s| s.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "Scale dev/small from 3 → 2 replicas",
            "Scale staging/big from 20 → 3 replicas",
            "Scale qa-test/medium from 6 → 2 replicas",
        ]
    );

    let top = top_suggestions(all, 2);
    let impacts: Vec<f64> = top.iter().map(|s| s.impact).collect();
    // big: (2*25.2 + 4*2.88) * 17 = 1052.64; medium: (25.2 + 2*2.88) * 4 = 123.84
    assert_eq!(impacts, vec![1053.0, 124.0]);
    assert_eq!(top[1].reason, "High replica count (6) for testing environment");
}

#[test]
fn test_empty_cluster() {
    let all = run_all_checks(&[], &CostRates::default());
    assert!(all.is_empty());
    assert!(top_suggestions(all, 3).is_empty());
}

#[test]
fn test_prefix_rule_alone_spares_workload() {
    let policy = ReplicaPolicy {
        production_keywords: Vec::new(),
        ..ReplicaPolicy::default()
    };
    let rates = CostRates::default();

    let spared = policy.detect_replica_waste(
        &[workload("prod-x", "analytics", Some(10), "500m", "512Mi")],
        &rates,
    );
    assert!(spared.is_empty());

    // Without the keyword rules, "prod" elsewhere in the name no longer protects it
    let flagged = policy.detect_replica_waste(
        &[workload("x-prod", "analytics", Some(10), "500m", "512Mi")],
        &rates,
    );
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].impact, 98.0);
}
