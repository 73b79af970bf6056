//! # Summary Report Module
//!
//! Aggregates the task results of a whole assignment into the markdown summary that
//! is appended to the CI job summary.
//!
//! ## Overview
//!
//! - [`ResultSet`]: encoded task results keyed by task identifier. This is the only
//!   input besides the task configuration; it does not read the environment.
//! - [`SummaryReport`]: totals, per-task rows and file checks, rendered with
//!   [`SummaryReport::render`].
//! - [`ReportSink`]: where the rendered report is appended.

use chrono::{DateTime, Local};
use std::{
    collections::HashMap,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};
use util::task_config::{ConfigError, TasksConfig};

use crate::codec::decode_or_zero;
use crate::error::MarkerError;
use crate::scorer::{clamp_score, compute_percentage, is_full_marks};

/// Encoded task results, keyed by task identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    encoded: HashMap<String, String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task_id: impl Into<String>, encoded: impl Into<String>) {
        self.encoded.insert(task_id.into(), encoded.into());
    }

    pub fn get(&self, task_id: &str) -> Option<&str> {
        self.encoded.get(task_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }
}

/// Per-task status marker shown in the score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGlyph {
    Success,
    Warning,
    Failure,
}

impl StatusGlyph {
    /// Full credit needs a positive maximum, so a zero/zero task is a failure.
    pub fn for_score(score: u32, max_score: u32) -> Self {
        if is_full_marks(score, max_score) {
            StatusGlyph::Success
        } else if score > 0 {
            StatusGlyph::Warning
        } else {
            StatusGlyph::Failure
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StatusGlyph::Success => "✅",
            StatusGlyph::Warning => "⚠️",
            StatusGlyph::Failure => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub status: StatusGlyph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub rows: Vec<TaskRow>,
    pub files: Vec<FileCheck>,
    pub total_score: u32,
    pub max_total: u32,
}

impl SummaryReport {
    /// Builds the report for `task_ids`, in the given order.
    ///
    /// Maximum scores come from the configuration, not from the decoded results.
    /// A result that is missing or cannot be decoded counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTask`] if an identifier is not configured.
    pub fn build(
        config: &TasksConfig,
        task_ids: &[String],
        results: &ResultSet,
    ) -> Result<Self, ConfigError> {
        let mut rows = Vec::with_capacity(task_ids.len());
        let mut files = Vec::with_capacity(task_ids.len());
        let mut total_score = 0u32;
        let mut max_total = 0u32;

        for task_id in task_ids {
            let task = config.find(task_id)?;
            let decoded = decode_or_zero(results.get(task_id));
            if decoded.score > task.max_score {
                tracing::warn!(
                    task = %task_id,
                    reported = decoded.score,
                    max_score = task.max_score,
                    "reported score exceeds task maximum; clamping"
                );
            }
            let score = clamp_score(decoded.score, task.max_score);

            total_score = total_score.saturating_add(score);
            max_total = max_total.saturating_add(task.max_score);

            rows.push(TaskRow {
                name: task.name.clone(),
                score,
                max_score: task.max_score,
                status: StatusGlyph::for_score(score, task.max_score),
            });
            files.push(FileCheck {
                path: task.file.clone(),
                exists: Path::new(&task.file).exists(),
            });
        }

        Ok(Self {
            rows,
            files,
            total_score,
            max_total,
        })
    }

    pub fn percentage(&self) -> u32 {
        compute_percentage(self.total_score, self.max_total)
    }

    /// Every point was earned and there was something to earn.
    pub fn is_perfect(&self) -> bool {
        is_full_marks(self.total_score, self.max_total)
    }

    /// Renders the markdown report, stamped with `generated_at`.
    pub fn render(&self, generated_at: DateTime<Local>) -> String {
        let mut out: Vec<String> = Vec::new();

        out.push("## 📊 FINAL REPORT FOR ALL TASKS\n".into());
        out.push("### 📈 Summary table\n".into());
        out.push("| Task | Score | Max | Status |".into());
        out.push("|------|-------|-----|--------|".into());
        for row in &self.rows {
            out.push(format!(
                "| **{}** | {} | {} | {} |",
                row.name,
                row.score,
                row.max_score,
                row.status.symbol()
            ));
        }
        out.push(format!(
            "| **TOTAL** | **{}** | **{}** | **{}%** |",
            self.total_score,
            self.max_total,
            self.percentage()
        ));
        out.push(String::new());

        out.push("### 📁 Submitted files:\n".into());
        for file in &self.files {
            let (glyph, label) = if file.exists {
                ("✅", "found")
            } else {
                ("❌", "not found")
            };
            out.push(format!("{glyph} **{}** - {label}", file.path));
        }
        out.push(String::new());

        out.push(format!(
            "### 🏆 Final grade: **{} / {}**",
            self.total_score, self.max_total
        ));
        out.push(String::new());
        if self.is_perfect() {
            out.push("🎉 **CONGRATULATIONS! Every task is 100% complete!**".into());
        } else {
            out.push("💡 **There is room for improvement! Check the test details.**".into());
        }
        out.push(String::new());
        out.push(format!(
            "**GitHub Classroom: {}/{} points**",
            self.total_score, self.max_total
        ));
        out.push(String::new());
        out.push(format!(
            "*Automated check complete* • {}",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

/// Destination of the rendered report. Writes always append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSink {
    Stdout,
    File(PathBuf),
}

impl ReportSink {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(ReportSink::File).unwrap_or(ReportSink::Stdout)
    }

    pub fn append(&self, text: &str) -> Result<(), MarkerError> {
        match self {
            ReportSink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|source| MarkerError::Sink {
                        path: "<stdout>".into(),
                        source,
                    })
            }
            ReportSink::File(path) => {
                let sink_err = |source: std::io::Error| MarkerError::Sink {
                    path: path.display().to_string(),
                    source,
                };
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(sink_err)?;
                file.write_all(text.as_bytes()).map_err(sink_err)
            }
        }
    }
}
