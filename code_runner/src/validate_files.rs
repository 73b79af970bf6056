use std::path::Path;

use crate::RunnerError;

/// Checks that the graded submission exists and is a regular file.
///
/// # Errors
///
/// Returns [`RunnerError::MissingFile`] when `path` does not exist or is a
/// directory.
pub fn validate_submission_file(path: &Path) -> Result<(), RunnerError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(RunnerError::MissingFile(path.display().to_string()))
    }
}
