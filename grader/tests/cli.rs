use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{TempDir, tempdir};

const RUN_TASK_TESTS: &str = env!("CARGO_BIN_EXE_run-task-tests");
const GENERATE_SUMMARY: &str = env!("CARGO_BIN_EXE_generate-summary");

/// A working directory holding a one-task `tasks.json` and its shell submission.
fn assignment() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let script = dir.path().join("task_01.sh");
    fs::write(&script, "read a b\necho $((a + b))\n").unwrap();

    let tasks = format!(
        r#"{{ "tasks": [ {{
            "id": "task_01", "name": "Sum", "file": "{}", "max_score": 5, "language": "shell",
            "tests": [ {{ "name": "sum", "input": "3 4\n", "expected_output": "7",
                          "comparison_method": "exact", "max_score": 5 }} ]
        }} ] }}"#,
        script.display()
    );
    let tasks_path = dir.path().join("tasks.json");
    fs::write(&tasks_path, tasks).unwrap();
    (dir, tasks_path)
}

fn run(binary: &str, dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(binary);
    command
        .args(args)
        .current_dir(dir)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("GITHUB_STEP_SUMMARY")
        .env_remove("GRADER_TASKS_PATH")
        .env_remove("GRADER_TIMEOUT_SECS")
        .env_remove("LOG_LEVEL")
        .env_remove("TASK_01_RESULT");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("binary should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_task_tests_without_arguments_prints_usage_and_exits_1() {
    let (dir, _) = assignment();
    let output = run(RUN_TASK_TESTS, dir.path(), &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage:"), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());
}

#[test]
fn run_task_tests_with_two_arguments_exits_1() {
    let (dir, _) = assignment();
    let output = run(RUN_TASK_TESTS, dir.path(), &["a", "b"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unexpected argument 'b'"), "{}", stderr(&output));
}

#[test]
fn help_and_version_exit_0() {
    let (dir, _) = assignment();

    for binary in [RUN_TASK_TESTS, GENERATE_SUMMARY] {
        let help = run(binary, dir.path(), &["--help"], &[]);
        assert_eq!(help.status.code(), Some(0));
        assert!(stdout(&help).contains("Usage:"));

        let version = run(binary, dir.path(), &["--version"], &[]);
        assert_eq!(version.status.code(), Some(0));
        assert!(stdout(&version).contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn run_task_tests_unknown_task_exits_1() {
    let (dir, tasks_path) = assignment();
    let config = tasks_path.display().to_string();
    let output = run(RUN_TASK_TESTS, dir.path(), &["task_99", "--config", &config], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Task task_99 not found in tasks.json"));
    assert!(!stdout(&output).contains("::set-output"));
}

#[test]
fn run_task_tests_prints_result_line() {
    let (dir, tasks_path) = assignment();
    let config = tasks_path.display().to_string();
    let output = run(RUN_TASK_TESTS, dir.path(), &["task_01", "--config", &config], &[]);

    assert_eq!(output.status.code(), Some(0));
    let line = stdout(&output);
    let encoded = line
        .trim()
        .strip_prefix("::set-output name=result::")
        .expect("marker line");
    let result = marker::codec::decode_task_result(encoded).unwrap();
    assert_eq!((result.score, result.max_score), (5, 5));
}

#[test]
fn invalid_timeout_setting_is_reported() {
    let (dir, tasks_path) = assignment();
    let config = tasks_path.display().to_string();
    let output = run(
        RUN_TASK_TESTS,
        dir.path(),
        &["task_01", "--config", &config],
        &[("GRADER_TIMEOUT_SECS", "abc")],
    );

    assert_eq!(output.status.code(), Some(0));
    let log = stderr(&output);
    assert!(log.contains("ignoring invalid GRADER_TIMEOUT_SECS"), "{log}");
    assert!(log.contains("abc"));
}

#[test]
fn generate_summary_unknown_task_exits_1() {
    let (dir, tasks_path) = assignment();
    let config = tasks_path.display().to_string();
    let output = run(GENERATE_SUMMARY, dir.path(), &["task_01", "task_99", "--config", &config], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Task task_99 not found in tasks.json"));
}

#[test]
fn generate_summary_appends_report_to_summary_file() {
    let (dir, tasks_path) = assignment();
    let config = tasks_path.display().to_string();
    let summary = dir.path().join("summary.md");
    fs::write(&summary, "# Earlier step\n").unwrap();
    let summary_var = summary.display().to_string();

    let output = run(
        GENERATE_SUMMARY,
        dir.path(),
        &["task_01", "--config", &config],
        &[("GITHUB_STEP_SUMMARY", summary_var.as_str())],
    );

    assert_eq!(output.status.code(), Some(0));
    let text = fs::read_to_string(&summary).unwrap();
    assert!(text.starts_with("# Earlier step\n"));
    assert!(text.contains("| **Sum** | 0 | 5 | ❌ |"), "{text}");
}
