//! Scenario-level change detection between two document versions.
//!
//! A scenario's title is its identity. Renaming a scenario therefore reports
//! the old title as removed and the new one as added; there is no similarity
//! matching.

use indexmap::IndexSet;

use crate::errors::ParseError;
use crate::index::{ScenarioIndex, build_scenario_index, build_scenario_index_with};
use crate::mode::ParseMode;

/// Titles added, modified and removed between two versions.
///
/// Each list follows first-appearance order of the index it was computed
/// from: `added` and `modified` follow the new version, `removed` the old.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioDiff {
    /// Titles present only in the new version.
    pub added: Vec<String>,
    /// Titles present in both versions whose blocks differ.
    pub modified: Vec<String>,
    /// Titles present only in the old version.
    pub removed: Vec<String>,
    /// Titles that occur more than once in either version; their comparison
    /// used the last occurrence on each side.
    pub ambiguous: Vec<String>,
}

impl ScenarioDiff {
    /// Returns `true` when nothing was added, modified or removed.
    ///
    /// Ambiguous titles are a warning about the inputs, not a change, and do
    /// not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    /// Total number of changed titles.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }
}

/// Compare two scenario indexes.
///
/// # Examples
///
/// ```
/// use scenario_diff::{build_scenario_index, diff_indexes};
///
/// let old = build_scenario_index("Scenario: A\n  Given x");
/// let new = build_scenario_index("Scenario: A\n  Given y");
/// assert_eq!(diff_indexes(&old, &new).modified, ["A"]);
/// ```
#[must_use]
pub fn diff_indexes(old: &ScenarioIndex, new: &ScenarioIndex) -> ScenarioDiff {
    let mut diff = ScenarioDiff::default();
    for (title, block) in new.iter() {
        match old.get(title) {
            None => diff.added.push(title.to_string()),
            Some(previous) if previous != block => diff.modified.push(title.to_string()),
            Some(_) => {}
        }
    }
    diff.removed = old
        .titles()
        .filter(|title| !new.contains(title))
        .map(str::to_string)
        .collect();

    let ambiguous: IndexSet<&str> = old.ambiguous().chain(new.ambiguous()).collect();
    diff.ambiguous = ambiguous.into_iter().map(str::to_string).collect();

    log::debug!(
        "scenario diff: {} added, {} modified, {} removed, {} ambiguous",
        diff.added.len(),
        diff.modified.len(),
        diff.removed.len(),
        diff.ambiguous.len()
    );
    diff
}

/// Compare two versions of a scenario document.
///
/// # Examples
///
/// ```
/// use scenario_diff::diff_scenarios;
///
/// let old = "Scenario: A\n  Given step\nScenario: B\n  Given step";
/// let new = "Scenario: A\n  Given step\nScenario: C\n  Given step";
/// let diff = diff_scenarios(old, new);
/// assert_eq!(diff.added, ["C"]);
/// assert_eq!(diff.removed, ["B"]);
/// assert!(diff.modified.is_empty());
/// ```
#[must_use]
pub fn diff_scenarios(old: &str, new: &str) -> ScenarioDiff {
    diff_indexes(&build_scenario_index(old), &build_scenario_index(new))
}

/// Compare two versions of a scenario document under an explicit
/// [`ParseMode`].
///
/// # Errors
///
/// In [`ParseMode::Strict`], returns the first [`ParseError`] found in the
/// old version, then in the new one.
pub fn diff_scenarios_with(
    old: &str,
    new: &str,
    mode: ParseMode,
) -> Result<ScenarioDiff, ParseError> {
    let old = build_scenario_index_with(old, mode)?;
    let new = build_scenario_index_with(new, mode)?;
    Ok(diff_indexes(&old, &new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renamed_scenario_is_removed_plus_added() {
        let diff = diff_scenarios("Scenario: Old\n  Given x", "Scenario: New\n  Given x");
        assert_eq!(diff.added, ["New"]);
        assert_eq!(diff.removed, ["Old"]);
        assert!(diff.modified.is_empty());
        assert_eq!(diff.change_count(), 2);
    }

    #[test]
    fn moving_a_scenario_into_a_rule_is_not_a_change() {
        let old = "Scenario: A\n  Given x";
        let new = "Rule: R\n  Example: A\n    Given x";
        assert!(diff_scenarios(old, new).is_empty());
    }

    #[test]
    fn indentation_change_is_a_modification() {
        let diff = diff_scenarios(
            "Scenario: A\n  Given x\n  When y",
            "Scenario: A\n  Given x\n    When y",
        );
        assert_eq!(diff.modified, ["A"]);
    }

    #[test]
    fn trailing_blank_lines_are_not_a_modification() {
        let diff = diff_scenarios("Scenario: A\n  Given x\n\n\n", "Scenario: A\n  Given x");
        assert!(diff.is_empty());
    }

    #[test]
    fn lists_follow_first_appearance_order() {
        let old = "Scenario: Z\nScenario: Y\nScenario: X";
        let new = "Scenario: C\nScenario: B\nScenario: A";
        let diff = diff_scenarios(old, new);
        assert_eq!(diff.added, ["C", "B", "A"]);
        assert_eq!(diff.removed, ["Z", "Y", "X"]);
    }

    #[test]
    fn modified_titles_follow_new_version_order() {
        let old = "Scenario: A
  Given a
Scenario: B
  Given b
Scenario: C
  Given c";
        let new = "Scenario: C
  Given c2
Scenario: B
  Given b
Scenario: A
  Given a2";
        let diff = diff_scenarios(old, new);
        assert_eq!(diff.modified, ["C", "A"]);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn ambiguous_titles_merge_both_sides_without_repeats() {
        let old = "Scenario: A\nScenario: A\nScenario: B\nScenario: B";
        let new = "Scenario: B\nScenario: B\nScenario: C\nScenario: C";
        let diff = diff_scenarios(old, new);
        assert_eq!(diff.ambiguous, ["A", "B", "C"]);
    }

    #[test]
    fn strict_mode_reports_error_from_old_version_first() {
        let Err(err) = diff_scenarios_with("| stray", "@tag", ParseMode::Strict) else {
            panic!("expected strict diff to fail");
        };
        assert_eq!(
            err,
            ParseError::UnrecognisedLine {
                line: 1,
                text: "| stray".into(),
            }
        );
    }
}
