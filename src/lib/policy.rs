//! Rule tables for the replica heuristics.
//!
//! Every threshold the replica check relies on lives here so that the rules
//! can be inspected and unit tested on their own.

use std::fmt;

/// One breakpoint of the replica step function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplicaStep {
    /// Applies to workloads with at least this many replicas.
    pub min_replicas: i32,
    /// Replica count to suggest.
    pub target: i32,
}

/// Environment a namespace appears to belong to, guessed from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Staging,
    Development,
    Testing,
    NonProduction,
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::NonProduction => "non-production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplicaPolicy {
    /// Infrastructure namespaces that are never analysed.
    pub system_namespaces: Vec<String>,
    /// Substrings that mark a namespace as production.
    pub production_keywords: Vec<String>,
    /// Prefixes that mark a namespace as production.
    pub production_prefixes: Vec<String>,
    /// Workloads at or below this replica count are left alone.
    pub replica_floor: i32,
    /// Step function, highest `min_replicas` first.
    pub replica_steps: Vec<ReplicaStep>,
    /// Savings must be strictly above this many dollars per month.
    pub min_monthly_savings: f64,
}

impl Default for ReplicaPolicy {
    fn default() -> Self {
        Self {
            system_namespaces: to_strings(&["kube-system", "kube-public", "kube-node-lease"]),
            production_keywords: to_strings(&["prod", "production", "live"]),
            production_prefixes: to_strings(&["prod-"]),
            replica_floor: 2,
            replica_steps: vec![
                ReplicaStep {
                    min_replicas: 10,
                    target: 3,
                },
                ReplicaStep {
                    min_replicas: 5,
                    target: 2,
                },
                ReplicaStep {
                    min_replicas: 3,
                    target: 2,
                },
            ],
            min_monthly_savings: 10.0,
        }
    }
}

impl ReplicaPolicy {
    pub fn is_system_namespace(&self, namespace: &str) -> bool {
        self.system_namespaces.iter().any(|ns| ns == namespace)
    }

    pub fn is_production_namespace(&self, namespace: &str) -> bool {
        self.production_keywords
            .iter()
            .any(|keyword| namespace.contains(keyword.as_str()))
            || self
                .production_prefixes
                .iter()
                .any(|prefix| namespace.starts_with(prefix.as_str()))
    }

    /// Replica count to suggest for a workload currently running `current`.
    ///
    /// The first step whose threshold is met wins; below every step the
    /// count is returned unchanged.
    pub fn suggested_replicas(&self, current: i32) -> i32 {
        self.replica_steps
            .iter()
            .find(|step| current >= step.min_replicas)
            .map(|step| step.target)
            .unwrap_or(current)
    }

    pub fn environment(&self, namespace: &str) -> Environment {
        if self.is_production_namespace(namespace) {
            Environment::Production
        } else if namespace.contains("stag") {
            Environment::Staging
        } else if namespace.contains("dev") {
            Environment::Development
        } else if namespace.contains("test") {
            Environment::Testing
        } else {
            Environment::NonProduction
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
