use code_runner::execution_config::ExecutionConfig;
use marker::codec::{decode_task_result, encode_task_result};
use marker::types::TestStatus;
use marker::{FILE_NOT_FOUND, GradingJob};
use std::time::{Duration, Instant};
use util::languages::Language;
use util::task_config::{ComparisonMethod, TaskDefinition, TestCaseDefinition};
use util::test_helpers::write_submission;

fn single_case_task(file: &str, expected: &str, method: ComparisonMethod) -> TaskDefinition {
    TaskDefinition {
        id: "task_01".into(),
        name: "Sum".into(),
        file: file.into(),
        max_score: 5,
        language: Language::Shell,
        timeout_secs: None,
        tests: vec![TestCaseDefinition {
            name: "three plus four".into(),
            input: "3 4\n".into(),
            expected_output: expected.into(),
            comparison_method: method,
            max_score: 5,
        }],
    }
}

async fn grade_script(script: &str, expected: &str, method: ComparisonMethod) -> u32 {
    let (_dir, path) = write_submission("task_01.sh", script);
    let task = single_case_task(&path.display().to_string(), expected, method);
    GradingJob::new(task, ExecutionConfig::default())
        .grade()
        .await
        .score
}

#[tokio::test]
async fn exact_comparison_trims_but_is_strict() {
    let sum = "read a b\necho $((a + b))\n";
    assert_eq!(grade_script(sum, "7", ComparisonMethod::Exact).await, 5);
    assert_eq!(grade_script("printf '7 '\n", "7", ComparisonMethod::Exact).await, 5);
    assert_eq!(grade_script("echo 07\n", "7", ComparisonMethod::Exact).await, 0);
}

#[tokio::test]
async fn contains_comparison_is_case_sensitive() {
    assert_eq!(
        grade_script("echo 'Result: OK'\n", "OK", ComparisonMethod::Contains).await,
        5
    );
    assert_eq!(grade_script("echo ok\n", "OK", ComparisonMethod::Contains).await, 0);
}

#[tokio::test]
async fn failing_case_keeps_stderr() {
    let (_dir, path) = write_submission("task_01.sh", "echo 6\necho 'off by one' >&2\n");
    let task = single_case_task(&path.display().to_string(), "7", ComparisonMethod::Exact);

    let result = GradingJob::new(task, ExecutionConfig::default()).grade().await;

    assert_eq!(result.tests[0].status, TestStatus::Fail);
    assert_eq!(result.tests[0].output, "6\nSTDERR: off by one\n");
}

#[tokio::test]
async fn missing_submission_scores_zero() {
    let task = single_case_task("/no/such/dir/task_01.sh", "7", ComparisonMethod::Exact);

    let result = GradingJob::new(task, ExecutionConfig::default()).grade().await;

    assert_eq!(result.score, 0);
    assert_eq!(result.max_score, 5);
    assert_eq!(result.tests[0].output, FILE_NOT_FOUND);
}

#[tokio::test]
async fn unparsable_submission_scores_zero_with_diagnostic() {
    let (_dir, path) = write_submission("task_01.sh", "if true; then\necho 7\n");
    let task = single_case_task(&path.display().to_string(), "7", ComparisonMethod::Exact);

    let result = GradingJob::new(task, ExecutionConfig::default()).grade().await;

    assert_eq!(result.score, 0);
    assert!(result.tests[0].output.starts_with("SyntaxError\n"));
    assert!(result.tests[0].output.len() > "SyntaxError\n".len());
}

#[tokio::test]
async fn sleeping_submission_times_out() {
    let (_dir, path) = write_submission("task_01.sh", "sleep 10\necho 7\n");
    let mut task = single_case_task(&path.display().to_string(), "7", ComparisonMethod::Exact);
    task.timeout_secs = Some(1);
    let config = ExecutionConfig::for_task(&task, 5);

    let started = Instant::now();
    let result = GradingJob::new(task, config).grade().await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(result.tests[0].status, TestStatus::Fail);
    assert_eq!(result.tests[0].output, "Timeout >1s");
}

#[tokio::test]
async fn graded_result_survives_transport() {
    let (_dir, path) = write_submission("task_01.sh", "read a b\necho $((a + b))\n");
    let task = single_case_task(&path.display().to_string(), "7", ComparisonMethod::Exact);

    let result = GradingJob::new(task, ExecutionConfig::default()).grade().await;
    let encoded = encode_task_result(&result).unwrap();

    assert_eq!(decode_task_result(&encoded).unwrap(), result);
}
