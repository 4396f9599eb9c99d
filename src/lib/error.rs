use thiserror::Error;

/// Main error type for kube-suggest
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Kubernetes API errors
    #[error("Kubernetes error: {0}")]
    Kubernetes(#[from] KubernetesError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON output errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kubernetes-specific errors
#[derive(Error, Debug)]
pub enum KubernetesError {
    /// Could not build a client for the cluster
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// API error
    #[error("API error: {0}")]
    ApiError(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Configuration or input file error
    #[error("File error: {0}")]
    FileError(String),
}

impl SuggestError {
    /// Whether the error means the cluster could not be reached or listed.
    pub fn is_cluster_failure(&self) -> bool {
        matches!(self, SuggestError::Kubernetes(_))
    }
}

/// Helper type alias for Results
pub type Result<T> = std::result::Result<T, SuggestError>;
