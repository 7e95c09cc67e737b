//! The missing-set computation.

use std::collections::BTreeSet;

use serde::Serialize;

/// A reconciliation plan: what is required, what is installed, and the
/// difference. Everything is recomputed from scratch on every run; nothing
/// here outlives the process.
#[derive(Debug, Clone, Serialize)]
pub struct SyncPlan {
    /// Package names declared in the requirements file.
    pub required: BTreeSet<String>,

    /// Package names pip reports as installed.
    pub installed: BTreeSet<String>,

    /// `required - installed`: the actionable work of the run.
    pub missing: BTreeSet<String>,
}

impl SyncPlan {
    /// Compute a plan from the required and installed sets.
    pub fn new(required: BTreeSet<String>, installed: BTreeSet<String>) -> Self {
        let missing = required.difference(&installed).cloned().collect();
        Self {
            required,
            installed,
            missing,
        }
    }

    /// Whether every required package is already installed.
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_is_set_difference() {
        let plan = SyncPlan::new(set(&["flask", "lxml", "requests"]), set(&["flask", "lxml"]));

        assert_eq!(plan.missing, set(&["requests"]));
    }

    #[test]
    fn missing_is_disjoint_from_installed() {
        let plan = SyncPlan::new(set(&["a", "b", "c"]), set(&["b", "d"]));

        assert!(plan.missing.intersection(&plan.installed).next().is_none());
        assert!(plan.missing.is_subset(&plan.required));
    }

    #[test]
    fn satisfied_when_required_subset_of_installed() {
        let plan = SyncPlan::new(set(&["flask"]), set(&["flask", "lxml"]));

        assert!(plan.is_satisfied());
        assert!(plan.missing.is_empty());
    }

    #[test]
    fn everything_missing_when_nothing_installed() {
        let plan = SyncPlan::new(set(&["a", "b"]), set(&[]));

        assert_eq!(plan.missing, set(&["a", "b"]));
        assert!(!plan.is_satisfied());
    }

    #[test]
    fn empty_required_is_trivially_satisfied() {
        let plan = SyncPlan::new(set(&[]), set(&["flask"]));

        assert!(plan.is_satisfied());
    }

    #[test]
    fn serializes_to_json_with_sorted_arrays() {
        let plan = SyncPlan::new(set(&["b", "a"]), set(&["a"]));
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["required"], serde_json::json!(["a", "b"]));
        assert_eq!(json["missing"], serde_json::json!(["b"]));
    }
}
