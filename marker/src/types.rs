//! # Types Module
//!
//! Data structures produced by grading and carried between the runner and the
//! summary reporter. The JSON shape is the transport format, so field names are
//! part of the contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
}

/// Outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
    /// Either 0 or `max_score`.
    pub score: u32,
    pub max_score: u32,
    /// Trimmed stdout, with stderr appended when the test failed.
    pub output: String,
}

impl TestResult {
    pub fn passed(name: impl Into<String>, max_score: u32, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Pass,
            score: max_score,
            max_score,
            output: output.into(),
        }
    }

    pub fn failed(name: impl Into<String>, max_score: u32, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Fail,
            score: 0,
            max_score,
            output: output.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == TestStatus::Pass
    }
}

/// Outcome of all test cases of one task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub max_score: u32,
    #[serde(default)]
    pub tests: Vec<TestResult>,
}

impl TaskResult {
    /// The result used whenever nothing trustworthy was received.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sums the test scores, clamped to the task's `max_score`.
    pub fn from_tests(max_score: u32, tests: Vec<TestResult>) -> Self {
        let total: u32 = tests.iter().map(|t| t.score).sum();
        Self {
            score: crate::scorer::clamp_score(total, max_score),
            max_score,
            tests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_transport_shape() {
        let result = TaskResult::from_tests(
            5,
            vec![TestResult::passed("sum", 5, "7")],
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "score": 5,
                "max_score": 5,
                "tests": [
                    { "name": "sum", "status": "pass", "score": 5, "max_score": 5, "output": "7" }
                ]
            })
        );
    }

    #[test]
    fn from_tests_clamps_to_task_max() {
        let result = TaskResult::from_tests(
            3,
            vec![
                TestResult::passed("a", 2, ""),
                TestResult::passed("b", 2, ""),
            ],
        );
        assert_eq!(result.score, 3);
    }

    #[test]
    fn missing_tests_field_defaults_to_empty() {
        let result: TaskResult = serde_json::from_str(r#"{"score": 2, "max_score": 4}"#).unwrap();
        assert_eq!(result.score, 2);
        assert!(result.tests.is_empty());
    }
}
