//! Offline input: Deployment manifests read from disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use serde_yaml::Value;

use crate::lib::quantity::NormalizedResources;
use crate::lib::workload::{DEFAULT_NAMESPACE, WorkloadDescriptor};
use crate::{ConfigError, Result};

/// Load Deployments from a YAML file, or from every YAML file under a directory.
///
/// Documents of any other kind are ignored. When `namespace` is given only
/// Deployments in that namespace are returned.
pub fn load_workloads(path: &Path, namespace: Option<&str>) -> Result<Vec<WorkloadDescriptor>> {
    let files = if path.is_dir() {
        let mut files = Vec::new();
        find_yaml_files_recursive(path, &mut files)?;
        files.sort();
        files
    } else if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        return Err(ConfigError::FileError(format!(
            "No such file or directory: {}",
            path.display()
        ))
        .into());
    };

    info!("Found {} YAML files to scan", files.len());

    let mut workloads = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file)?;
        let found = parse_workloads(&content)?;
        debug!("Found {} deployments in {}", found.len(), file.display());
        workloads.extend(found);
    }

    if let Some(namespace) = namespace {
        workloads.retain(|w| w.namespace == namespace);
    }

    info!("Loaded {} deployments from manifests", workloads.len());
    Ok(workloads)
}

/// Parse every Deployment in a (possibly multi-document) YAML string.
pub fn parse_workloads(content: &str) -> Result<Vec<WorkloadDescriptor>> {
    let mut workloads = Vec::new();

    for doc in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(doc)?;
        if let Some(workload) = workload_from_value(&value) {
            workloads.push(workload);
        }
    }

    Ok(workloads)
}

fn find_yaml_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.file_name().and_then(|n| n.to_str()) == Some(".git") {
            continue;
        }

        if path.is_dir() {
            find_yaml_files_recursive(&path, files)?;
        } else if let Some(ext) = path.extension() {
            if ext == "yaml" || ext == "yml" {
                files.push(path);
            }
        }
    }

    Ok(())
}

fn workload_from_value(doc: &Value) -> Option<WorkloadDescriptor> {
    if doc.get("kind").and_then(|k| k.as_str()) != Some("Deployment") {
        return None;
    }

    let metadata = doc.get("metadata");
    let name = metadata
        .and_then(|m| m.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or_default();
    let namespace = metadata
        .and_then(|m| m.get("namespace"))
        .and_then(|n| n.as_str())
        .unwrap_or(DEFAULT_NAMESPACE);

    let spec = doc.get("spec");
    let current_replicas = spec
        .and_then(|s| s.get("replicas"))
        .and_then(|r| r.as_i64())
        .and_then(|r| i32::try_from(r).ok());

    let containers = spec
        .and_then(|s| s.get("template"))
        .and_then(|t| t.get("spec"))
        .and_then(|s| s.get("containers"))
        .and_then(|c| c.as_sequence())
        .map(|containers| containers.iter().map(container_requests).collect())
        .unwrap_or_default();

    Some(WorkloadDescriptor::new(
        namespace,
        name,
        current_replicas,
        containers,
    ))
}

fn container_requests(container: &Value) -> NormalizedResources {
    let requests = container
        .get("resources")
        .and_then(|r| r.get("requests"));

    let cpu = requests.and_then(|r| r.get("cpu")).map(quantity_string);
    let memory = requests.and_then(|r| r.get("memory")).map(quantity_string);

    NormalizedResources::from_requests(
        cpu.as_deref().unwrap_or_default(),
        memory.as_deref().unwrap_or_default(),
    )
}

/// YAML turns `cpu: 1` into a number; quantities are strings either way.
fn quantity_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
