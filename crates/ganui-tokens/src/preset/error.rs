//! Preset loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a preset sheet cannot be loaded.
#[derive(Debug, Error)]
pub enum PresetError {
    /// The file could not be read
    #[error("failed to read preset sheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file extension is not a recognized preset format
    #[error("unsupported preset sheet format: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
    /// Invalid YAML, unknown key or unknown label
    #[error("invalid YAML preset sheet: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Invalid JSON, unknown key or unknown label
    #[error("invalid JSON preset sheet: {0}")]
    Json(#[from] serde_json::Error),
}
