/// OutputComparator is a strategy trait for comparing outputs.
/// Each implementation decides whether the actual output of one test case
/// satisfies the expected output.
pub trait OutputComparator: Send + Sync {
    /// Returns `true` when `actual` is an acceptable answer for `expected`.
    ///
    /// Both values are compared after trimming surrounding whitespace.
    fn matches(&self, expected: &str, actual: &str) -> bool;
}
