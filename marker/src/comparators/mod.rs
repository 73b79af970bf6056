//! # Comparators
//!
//! Each comparator implements the [`OutputComparator`] trait, so the grading job can
//! pick one per test case from its configured [`ComparisonMethod`].
//!
//! The available comparators are:
//! - [`exact_comparator`]: the trimmed output must equal the trimmed expected value.
//! - [`contains_comparator`]: the trimmed expected value must occur in the output.
//!
//! Unknown methods get [`RejectingComparator`], which never matches.

pub mod contains_comparator;
pub mod exact_comparator;

use crate::traits::comparator::OutputComparator;
use util::task_config::ComparisonMethod;

use contains_comparator::ContainsComparator;
use exact_comparator::ExactComparator;

/// Comparator used for a comparison method nobody recognises.
pub struct RejectingComparator;

impl OutputComparator for RejectingComparator {
    fn matches(&self, _expected: &str, _actual: &str) -> bool {
        false
    }
}

/// Picks the comparator for `method`.
pub fn comparator_for(method: ComparisonMethod) -> &'static dyn OutputComparator {
    match method {
        ComparisonMethod::Exact => &ExactComparator,
        ComparisonMethod::Contains => &ContainsComparator,
        ComparisonMethod::Unknown => &RejectingComparator,
    }
}
