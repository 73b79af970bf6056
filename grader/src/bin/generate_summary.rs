use anyhow::Result;
use chrono::Local;
use clap::Parser;
use grader::{cli::parse_or_exit, commands::summarize, env_results::collect_from_env, logging::init_logging};
use marker::report::ReportSink;
use std::{path::PathBuf, process::ExitCode};
use util::config::AppConfig;

/// Aggregate encoded task results from the environment into a markdown summary.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Task identifiers to include, in report order
    task_ids: Vec<String>,
    /// Tasks file. Defaults to GRADER_TASKS_PATH or ".github/tasks.json"
    #[arg(long)]
    config: Option<PathBuf>,
    /// File the report is appended to. Defaults to GITHUB_STEP_SUMMARY, then stdout
    #[arg(long)]
    summary_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Args = parse_or_exit();
    let app = AppConfig::from_env();
    init_logging(&app.log_level);
    app.warn_about_ignored();

    match run(args, app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args, app: AppConfig) -> Result<()> {
    let tasks_path = args.config.unwrap_or(app.tasks_path);
    let results = collect_from_env(&args.task_ids);

    let report = summarize(&tasks_path, &args.task_ids, &results, Local::now())?;

    ReportSink::from_path(args.summary_file.or(app.step_summary)).append(&report)?;
    Ok(())
}
