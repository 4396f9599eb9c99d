use serde::Serialize;

use crate::lib::suggestion::{Suggestion, total_impact};

/// Top-level JSON document containing metadata and suggestions
#[derive(Debug, Clone, Serialize)]
pub struct SuggestOutput {
    pub metadata: OutputMetadata,
    pub suggestions: Vec<Suggestion>,
}

/// Metadata about the analysis run
#[derive(Debug, Clone, Serialize)]
pub struct OutputMetadata {
    pub timestamp: String,
    pub namespace: Option<String>,
    pub source: InputSource,
    pub total_workloads: usize,
    pub limit: usize,
    pub total_impact: f64,
}

/// Where the analysed workloads came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Cluster,
    Manifests,
    Demo,
}

impl SuggestOutput {
    pub fn new(
        namespace: Option<String>,
        source: InputSource,
        total_workloads: usize,
        limit: usize,
        suggestions: Vec<Suggestion>,
    ) -> Self {
        Self {
            metadata: OutputMetadata {
                timestamp: chrono::Utc::now().to_rfc3339(),
                namespace,
                source,
                total_workloads,
                limit,
                total_impact: total_impact(&suggestions),
            },
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::suggestion::demo_suggestions;

    #[test]
    fn serializes_metadata_and_suggestions() {
        let output = SuggestOutput::new(None, InputSource::Demo, 0, 3, demo_suggestions());
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["metadata"]["source"], "demo");
        assert_eq!(json["metadata"]["total_impact"], 318.0);
        assert_eq!(json["metadata"]["limit"], 3);
        assert!(json["metadata"]["namespace"].is_null());
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
        assert!(chrono::DateTime::parse_from_rfc3339(
            json["metadata"]["timestamp"].as_str().unwrap()
        )
        .is_ok());
    }
}
