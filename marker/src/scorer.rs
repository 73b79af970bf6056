//! # Scorer Module
//!
//! Score arithmetic shared by the grading job and the summary report.

/// Score awarded for one test case: all or nothing.
pub fn score_test(passed: bool, max_score: u32) -> u32 {
    if passed { max_score } else { 0 }
}

/// Caps an achieved score at the maximum the task allows.
pub fn clamp_score(score: u32, max_score: u32) -> u32 {
    score.min(max_score)
}

/// Full marks on something that is actually worth points.
///
/// A zero maximum never counts, so an empty or missing result cannot read as a pass.
pub fn is_full_marks(score: u32, max_score: u32) -> bool {
    max_score > 0 && score >= max_score
}

/// Integer percentage of `achieved` over `possible`, rounded down.
///
/// Returns 0 when `possible` is 0.
///
/// # Example
///
/// ```
/// use marker::scorer::compute_percentage;
///
/// assert_eq!(compute_percentage(5, 10), 50);
/// assert_eq!(compute_percentage(2, 3), 66);
/// assert_eq!(compute_percentage(0, 0), 0);
/// ```
pub fn compute_percentage(achieved: u32, possible: u32) -> u32 {
    if possible == 0 {
        return 0;
    }
    (u64::from(achieved) * 100 / u64::from(possible)) as u32
}
