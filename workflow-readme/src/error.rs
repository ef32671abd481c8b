use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a README regeneration run without writing anything.
#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("README.md not found at {0}")]
    ReadmeNotFound(PathBuf),

    #[error("Workflow markers not found in {0}")]
    MissingMarkers(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single workflow file that could not be read; the run skips it.
#[derive(Debug, Error)]
pub enum WorkflowParseError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid workflow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("workflow JSON is not an object")]
    NotAnObject,
}
