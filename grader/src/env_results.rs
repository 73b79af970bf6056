//! Boundary adapter between CI environment variables and [`ResultSet`].
//!
//! Each upstream job exports its encoded result under one of two names:
//! `TASK_<last two characters of the id>_RESULT`, or `<ID IN UPPERCASE>_RESULT`.
//! The short form is tried first.

use marker::report::ResultSet;
use std::env;

/// Short variable name: `task_01` -> `TASK_01_RESULT`.
pub fn short_var_name(task_id: &str) -> String {
    let chars: Vec<char> = task_id.chars().collect();
    let suffix: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    format!("TASK_{suffix}_RESULT")
}

/// Long variable name: `task_01` -> `TASK_01_RESULT`, `lab3` -> `LAB3_RESULT`.
pub fn long_var_name(task_id: &str) -> String {
    format!("{}_RESULT", task_id.to_uppercase())
}

/// Collects the encoded result of every task through `lookup`.
///
/// Tasks with neither variable set (or both empty) are left out of the set.
pub fn collect_results<F>(task_ids: &[String], lookup: F) -> ResultSet
where
    F: Fn(&str) -> Option<String>,
{
    let mut results = ResultSet::new();
    for task_id in task_ids {
        let short = short_var_name(task_id);
        let encoded = lookup(&short).filter(|v| !v.is_empty()).or_else(|| {
            let long = long_var_name(task_id);
            tracing::debug!(task = %task_id, short = %short, long = %long, "falling back to long name");
            lookup(&long).filter(|v| !v.is_empty())
        });

        match encoded {
            Some(value) => results.insert(task_id.clone(), value),
            None => tracing::warn!(task = %task_id, "no result found in environment"),
        }
    }
    results
}

/// [`collect_results`] over the process environment.
pub fn collect_from_env(task_ids: &[String]) -> ResultSet {
    collect_results(task_ids, |name| env::var(name).ok())
}
