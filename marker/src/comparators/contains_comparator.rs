//! A comparator that awards marks when the expected value appears anywhere in the output.

use crate::traits::comparator::OutputComparator;

/// Full marks if the trimmed expected value is a substring of the trimmed output.
/// The check is case-sensitive.
pub struct ContainsComparator;

impl OutputComparator for ContainsComparator {
    fn matches(&self, expected: &str, actual: &str) -> bool {
        actual.trim().contains(expected.trim())
    }
}
