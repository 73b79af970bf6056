use std::time::Duration;
use util::task_config::{DEFAULT_TIMEOUT_SECS, TaskDefinition};

/// Runtime limits applied to every process spawned for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub timeout_secs: u64, // Max wall-clock time for a single test case
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ExecutionConfig {
    pub fn new(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    /// Uses the task's own `timeout_secs` when present, `fallback_secs` otherwise.
    pub fn for_task(task: &TaskDefinition, fallback_secs: u64) -> Self {
        Self::new(task.timeout_secs.unwrap_or(fallback_secs))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
