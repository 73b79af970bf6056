use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a unique temporary directory holding one submission file.
///
/// Keep the returned `TempDir` in scope for as long as you need the file;
/// it is removed when dropped.
pub fn write_submission(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let path = tmp.path().join(file_name);
    fs::write(&path, contents).expect("failed to write submission");
    (tmp, path)
}
