//! Error types for kubetab

use thiserror::Error;

/// Main error type for kubetab
#[derive(Debug, Error)]
pub enum Error {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("run is not supported for {path}")]
    RunUnsupported { path: String },

    #[error("invalid resource path '{0}', expected namespace/name")]
    InvalidPath(String),

    #[error("invalid resource type: {0}")]
    InvalidResourceType(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Result type alias for kubetab
pub type Result<T> = std::result::Result<T, Error>;
