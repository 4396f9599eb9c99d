//! Kubernetes Cost Suggestion Library
//!
//! This library inspects the declared resource requests and replica counts of
//! Kubernetes workloads, estimates what over-provisioning costs each month and
//! ranks the resulting cost-saving suggestions.

pub mod lib {
    pub mod checks;
    pub mod cli;
    pub mod config;
    pub mod cost;
    pub mod error;
    pub mod kubernetes;
    pub mod logger;
    pub mod manifests;
    pub mod output;
    pub mod policy;
    pub mod quantity;
    pub mod report;
    pub mod suggestion;
    pub mod tui;
    pub mod workload;
}

// Re-export commonly used types at the root level for convenience
pub use lib::checks::{detect_replica_waste, run_all_checks};
pub use lib::cli::{Cli, OutputFormat};
pub use lib::config::Config;
pub use lib::cost::CostRates;
pub use lib::error::{ConfigError, KubernetesError, Result, SuggestError};
pub use lib::kubernetes::KubernetesLoader;
pub use lib::logger::init_logger;
pub use lib::manifests::{load_workloads, parse_workloads};
pub use lib::output::{InputSource, OutputMetadata, SuggestOutput};
pub use lib::policy::{Environment, ReplicaPolicy, ReplicaStep};
pub use lib::quantity::{NormalizedResources, parse_cpu, parse_memory};
pub use lib::report::render_report;
pub use lib::suggestion::{Suggestion, demo_suggestions, top_suggestions, total_impact};
pub use lib::tui::display_suggestions_table;
pub use lib::workload::WorkloadDescriptor;
