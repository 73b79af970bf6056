//! The two grading commands, independent of argument parsing.

use chrono::{DateTime, Local};
use code_runner::execution_config::ExecutionConfig;
use marker::GradingJob;
use marker::codec::encode_task_result;
use marker::error::MarkerError;
use marker::report::{ResultSet, SummaryReport};
use marker::types::TaskResult;
use std::path::Path;
use util::task_config::TasksConfig;

/// Grades `task_id` and returns its result together with the encoded form.
///
/// # Errors
///
/// Fails only when the configuration cannot be loaded or does not name the
/// task. Problems with the submission are part of the returned result.
pub async fn grade_task(
    tasks_path: &Path,
    task_id: &str,
    fallback_timeout_secs: u64,
) -> Result<(TaskResult, String), MarkerError> {
    let tasks = TasksConfig::load(tasks_path)?;
    let task = tasks.find(task_id)?.clone();
    let config = ExecutionConfig::for_task(&task, fallback_timeout_secs);

    tracing::info!(task = %task.id, file = %task.file, timeout_secs = config.timeout_secs, "grading");
    let result = GradingJob::new(task, config).grade().await;
    let encoded = encode_task_result(&result)?;

    Ok((result, encoded))
}

/// Renders the summary for `task_ids` from already collected results.
pub fn summarize(
    tasks_path: &Path,
    task_ids: &[String],
    results: &ResultSet,
    generated_at: DateTime<Local>,
) -> Result<String, MarkerError> {
    let tasks = TasksConfig::load(tasks_path)?;
    let report = SummaryReport::build(&tasks, task_ids, results)?;

    tracing::info!(
        total = report.total_score,
        max = report.max_total,
        percentage = report.percentage(),
        "summary built"
    );
    Ok(report.render(generated_at))
}
