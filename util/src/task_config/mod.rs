//! Task configuration document (`.github/tasks.json`).
//!
//! The document lists every graded task together with its target file and its
//! ordered test cases. It is read once per process and never mutated.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

use crate::languages::Language;

pub const DEFAULT_TASKS_PATH: &str = ".github/tasks.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read task config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid task config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Task {0} not found in tasks.json")]
    UnknownTask(String),
}

/// How a test case decides whether the submission's output is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMethod {
    Exact,
    Contains,
    /// Any method name we do not recognise. Such a test never passes.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestCaseDefinition {
    pub name: String,
    #[serde(default)]
    pub input: String,
    pub expected_output: String,
    pub comparison_method: ComparisonMethod,
    pub max_score: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskDefinition {
    pub id: String,
    pub name: String,
    /// Path to the graded submission, relative to the working directory.
    pub file: String,
    pub max_score: u32,

    #[serde(default = "default_language")]
    pub language: Language,

    /// Per-task override of the wall-clock limit for a single test.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub tests: Vec<TestCaseDefinition>,
}

fn default_language() -> Language {
    Language::Python
}

impl TaskDefinition {
    /// Sum of the per-test maximum scores.
    pub fn tests_max_score(&self) -> u32 {
        self.tests.iter().map(|t| t.max_score).sum()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TasksConfig {
    #[serde(default)]
    pub tasks: Vec<TaskDefinition>,
}

impl TasksConfig {
    /// Reads and parses the configuration document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        config.warn_on_inconsistencies();
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Looks up a task by its identifier.
    pub fn find(&self, task_id: &str) -> Result<&TaskDefinition, ConfigError> {
        self.tasks
            .iter()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ConfigError::UnknownTask(task_id.to_string()))
    }

    fn warn_on_inconsistencies(&self) {
        for task in &self.tasks {
            let tests_total = task.tests_max_score();
            if tests_total > task.max_score {
                tracing::warn!(
                    task = %task.id,
                    tests_total,
                    max_score = task.max_score,
                    "test max scores exceed the task max score; totals will be clamped"
                );
            }
            if task.tests.is_empty() {
                tracing::warn!(task = %task.id, "task has no test cases");
            }
        }
    }
}
