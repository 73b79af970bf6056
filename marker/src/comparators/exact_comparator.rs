//! A comparator that awards marks only when the output equals the expected value.

use crate::traits::comparator::OutputComparator;

/// Full marks if the trimmed output equals the trimmed expected value.
///
/// Internal whitespace and case are significant, so `"07"` does not match `"7"`.
pub struct ExactComparator;

impl OutputComparator for ExactComparator {
    fn matches(&self, expected: &str, actual: &str) -> bool {
        actual.trim() == expected.trim()
    }
}
