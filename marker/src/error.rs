//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum, which covers the failures that can
//! stop the marker from producing output. Problems caused by a submission are never
//! represented here; they become failing test results instead.
//!
//! # Example
//!
//! ```rust
//! use marker::error::MarkerError;
//! use util::task_config::TasksConfig;
//!
//! fn lookup(config: &TasksConfig, id: &str) -> Result<String, MarkerError> {
//!     Ok(config.find(id)?.name.clone())
//! }
//! ```

use thiserror::Error;
use util::task_config::ConfigError;

/// Represents all error types that can occur in the marker system.
#[derive(Debug, Error)]
pub enum MarkerError {
    /// The task configuration is unreadable or does not name the task.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A task result could not be serialized.
    #[error("failed to encode task result: {0}")]
    Encode(#[from] serde_json::Error),
    /// The report sink could not be written.
    #[error("failed to write report to {path}: {source}")]
    Sink {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
