use std::{fs::OpenOptions, io::Write, path::Path};

/// Appends `key=value` to the step-output file (`GITHUB_OUTPUT`).
pub fn append_step_output(path: &Path, key: &str, value: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{key}={value}")
}
