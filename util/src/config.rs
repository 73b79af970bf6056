//! Process-level configuration loaded from environment variables.
//!
//! `AppConfig` collects the knobs both binaries read from the CI environment.
//! Command-line flags take precedence over anything loaded here.

use std::env;
use std::path::PathBuf;

use crate::task_config::{DEFAULT_TASKS_PATH, DEFAULT_TIMEOUT_SECS};

/// Represents the configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub tasks_path: PathBuf,
    pub timeout_secs: u64,
    /// Markdown sink for the summary report (`GITHUB_STEP_SUMMARY`).
    pub step_summary: Option<PathBuf>,
    /// Key/value output file for step outputs (`GITHUB_OUTPUT`).
    pub step_output: Option<PathBuf>,
    /// Raw `GRADER_TIMEOUT_SECS` value that was not a number and got replaced
    /// by the default. Reported by [`AppConfig::warn_about_ignored`].
    pub invalid_timeout: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            tasks_path: PathBuf::from(DEFAULT_TASKS_PATH),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            step_summary: None,
            step_output: None,
            invalid_timeout: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// This runs before logging is set up, so nothing is logged here; call
    /// [`AppConfig::warn_about_ignored`] once a subscriber is installed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut invalid_timeout = None;
        let timeout_secs = match non_empty("GRADER_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse() {
                Ok(secs) => secs,
                Err(_) => {
                    invalid_timeout = Some(raw);
                    defaults.timeout_secs
                }
            },
            None => defaults.timeout_secs,
        };

        Self {
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            tasks_path: non_empty("GRADER_TASKS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.tasks_path),
            timeout_secs,
            step_summary: non_empty("GITHUB_STEP_SUMMARY").map(PathBuf::from),
            step_output: non_empty("GITHUB_OUTPUT").map(PathBuf::from),
            invalid_timeout,
        }
    }

    /// Logs every setting that was present but unusable.
    pub fn warn_about_ignored(&self) {
        if let Some(raw) = &self.invalid_timeout {
            tracing::warn!(
                value = %raw,
                default = self.timeout_secs,
                "ignoring invalid GRADER_TIMEOUT_SECS"
            );
        }
    }
}
