//! Process execution for graded submissions.
//!
//! Submissions are interpreted programs started directly from an argument
//! vector (no shell). Every execution is bounded by a wall-clock timeout. The
//! child leads its own process group, and the whole group is killed when the
//! limit is hit.

use async_trait::async_trait;
use std::{path::Path, process::Stdio, time::Duration};
use thiserror::Error;
use tokio::{
    io::AsyncWriteExt,
    process::Command,
    time::timeout,
};
use util::languages::{CommandLine, Language, LanguageExt};

pub mod execution_config;
pub mod validate_files;

use crate::execution_config::ExecutionConfig;

/// Upper bound for the parse-only check. It never runs student logic.
const SYNTAX_CHECK_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("file not found: {0}")]
    MissingFile(String),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Timeout >{secs}s")]
    Timeout { secs: u64 },
}

/// Captured result of one finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ExecutionOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Outcome of the parse-only check on a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxCheck {
    Valid,
    /// Diagnostic produced by the language's checker, verbatim.
    Invalid(String),
}

/// Seam between the grading job and the operating system.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Checks that `file` parses as valid source for `language`.
    async fn check_syntax(&self, language: Language, file: &Path) -> SyntaxCheck;

    /// Runs `file` once, feeding `input` on stdin.
    async fn execute(
        &self,
        language: Language,
        file: &Path,
        input: &str,
    ) -> Result<ExecutionOutput, RunnerError>;
}

/// [`Executor`] that spawns local interpreter processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    config: ExecutionConfig,
}

impl ProcessExecutor {
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Executor for ProcessExecutor {
    async fn check_syntax(&self, language: Language, file: &Path) -> SyntaxCheck {
        let command = language.syntax_check_command(file);
        match run_command(&command, "", SYNTAX_CHECK_TIMEOUT).await {
            Ok(output) if output.success() => SyntaxCheck::Valid,
            Ok(output) => {
                let diagnostic = if output.stderr.trim().is_empty() {
                    output.stdout
                } else {
                    output.stderr
                };
                SyntaxCheck::Invalid(diagnostic)
            }
            Err(err) => {
                tracing::warn!(file = %file.display(), error = %err, "syntax check could not run");
                SyntaxCheck::Invalid(err.to_string())
            }
        }
    }

    async fn execute(
        &self,
        language: Language,
        file: &Path,
        input: &str,
    ) -> Result<ExecutionOutput, RunnerError> {
        let command = language.run_command(file);
        run_command(&command, input, self.config.timeout()).await
    }
}

/// Spawns `command`, writes `input` to its stdin and collects stdout/stderr.
///
/// When `limit` elapses the child and everything it started are killed, and
/// [`RunnerError::Timeout`] is returned.
pub async fn run_command(
    command: &CommandLine,
    input: &str,
    limit: Duration,
) -> Result<ExecutionOutput, RunnerError> {
    tracing::debug!(program = %command.program, args = ?command.args, "spawning");

    let mut process = Command::new(&command.program);
    process
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    #[cfg(unix)]
    process.process_group(0);

    let mut child = process.spawn().map_err(|source| RunnerError::Spawn {
        program: command.program.clone(),
        source,
    })?;
    let pid = child.id();

    let stdin = child.stdin.take();
    let input = input.as_bytes().to_vec();
    let feed = async move {
        if let Some(mut stdin) = stdin {
            // A program may exit without consuming its input.
            if let Err(e) = stdin.write_all(&input).await {
                tracing::debug!(error = %e, "stdin closed early");
            }
        }
    };

    let execution = async move {
        let (_, output) = tokio::join!(feed, child.wait_with_output());
        output
    };

    tokio::pin!(execution);

    match timeout(limit, &mut execution).await {
        Ok(Ok(output)) => Ok(ExecutionOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }),
        Ok(Err(e)) => Err(RunnerError::Io(e)),
        Err(_) => {
            tracing::debug!(program = %command.program, secs = limit.as_secs(), "timed out");
            // The child is not reaped until `execution` drops, so the group id is still ours.
            kill_process_group(pid);
            Err(RunnerError::Timeout {
                secs: limit.as_secs(),
            })
        }
    }
}

#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    let Some(pid) = pid.and_then(|pid| i32::try_from(pid).ok()) else {
        return;
    };
    let rc = unsafe { libc::kill(-pid, libc::SIGKILL) };
    if rc != 0 {
        tracing::debug!(
            pid,
            error = %std::io::Error::last_os_error(),
            "process group kill failed"
        );
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}
