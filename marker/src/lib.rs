//! # Marker Library
//!
//! This crate grades one task of a coding assignment and summarises the results of
//! a whole assignment.
//!
//! ## Key Concepts
//! - **GradingJob**: runs every test case of one task against its submission file.
//! - **Comparators**: pluggable strategies for judging output (exact, contains).
//! - **Codec**: JSON + base64 transport of a [`TaskResult`] between CI jobs.
//! - **Reports**: the markdown summary across all tasks.

pub mod codec;
pub mod comparators;
pub mod error;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;

use crate::comparators::comparator_for;
use crate::scorer::score_test;
use crate::types::{TaskResult, TestResult, TestStatus};

use code_runner::execution_config::ExecutionConfig;
use code_runner::validate_files::validate_submission_file;
use code_runner::{Executor, ProcessExecutor, RunnerError, SyntaxCheck};
use std::path::PathBuf;
use util::task_config::{TaskDefinition, TestCaseDefinition};

/// Output recorded for every test when the submission file is absent.
pub const FILE_NOT_FOUND: &str = "file not found";

/// Grades a single task against its submission file.
///
/// Nothing the submission does can make [`GradingJob::grade`] fail: a missing
/// file, a syntax error, a crash or a timeout all become failing test results.
pub struct GradingJob<'a> {
    task: TaskDefinition,
    submission: PathBuf,
    executor: Box<dyn Executor + 'a>,
}

impl<'a> GradingJob<'a> {
    /// Create a job that runs `task.file` with local interpreter processes.
    pub fn new(task: TaskDefinition, config: ExecutionConfig) -> Self {
        let submission = PathBuf::from(&task.file);
        Self {
            task,
            submission,
            executor: Box::new(ProcessExecutor::new(config)),
        }
    }

    /// Set a custom executor for this job.
    pub fn with_executor<E: Executor + 'a>(mut self, executor: E) -> Self {
        self.executor = Box::new(executor);
        self
    }

    /// Run the gates and then every test case, in order.
    ///
    /// 1. Missing submission: every test fails with [`FILE_NOT_FOUND`].
    /// 2. Submission does not parse: every test fails with the parser diagnostic.
    /// 3. Otherwise each test runs in its own process, one after another.
    pub async fn grade(self) -> TaskResult {
        let task = &self.task;

        if let Err(err) = validate_submission_file(&self.submission) {
            tracing::warn!(task = %task.id, error = %err, "submission missing");
            return self.fail_all(FILE_NOT_FOUND);
        }

        if let SyntaxCheck::Invalid(diagnostic) = self
            .executor
            .check_syntax(task.language, &self.submission)
            .await
        {
            tracing::warn!(task = %task.id, "submission failed the syntax check");
            return self.fail_all(&format!("SyntaxError\n{diagnostic}"));
        }

        let mut results = Vec::with_capacity(task.tests.len());
        for case in &task.tests {
            let result = self.run_case(case).await;
            tracing::info!(
                task = %task.id,
                test = %case.name,
                score = result.score,
                max_score = result.max_score,
                "test finished"
            );
            results.push(result);
        }

        TaskResult::from_tests(task.max_score, results)
    }

    async fn run_case(&self, case: &TestCaseDefinition) -> TestResult {
        let execution = self
            .executor
            .execute(self.task.language, &self.submission, &case.input)
            .await;

        match execution {
            Ok(output) => {
                let actual = output.stdout.trim();
                let passed = comparator_for(case.comparison_method)
                    .matches(&case.expected_output, actual);

                let mut text = actual.to_string();
                if !passed && !output.stderr.is_empty() {
                    text.push_str(&format!("\nSTDERR: {}", output.stderr));
                }

                TestResult {
                    name: case.name.clone(),
                    status: if passed { TestStatus::Pass } else { TestStatus::Fail },
                    score: score_test(passed, case.max_score),
                    max_score: case.max_score,
                    output: text,
                }
            }
            Err(err @ RunnerError::Timeout { .. }) => {
                TestResult::failed(&case.name, case.max_score, err.to_string())
            }
            Err(err) => {
                tracing::warn!(test = %case.name, error = %err, "test execution failed");
                TestResult::failed(&case.name, case.max_score, format!("Error: {err}"))
            }
        }
    }

    fn fail_all(&self, output: &str) -> TaskResult {
        let tests = self
            .task
            .tests
            .iter()
            .map(|case| TestResult::failed(&case.name, case.max_score, output))
            .collect();
        TaskResult::from_tests(self.task.max_score, tests)
    }
}
