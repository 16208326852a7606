//! Flat scenario index used for change detection.
//!
//! The index maps each scenario title to the trimmed raw text that followed
//! its header. Top-level and rule-nested scenarios share one namespace, so a
//! scenario moved into or out of a rule keeps its identity.

use indexmap::{IndexMap, IndexSet};

use crate::errors::ParseError;
use crate::mode::ParseMode;
use crate::parser::{scan, scan_permissive};

/// Mapping from scenario title to its content block, in order of first
/// appearance.
///
/// A title that appears more than once keeps the position of its first
/// occurrence and the block of its last one. Such titles are listed by
/// [`ambiguous`](Self::ambiguous) so callers can tell a collapsed entry from
/// a unique one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioIndex {
    scenarios: IndexMap<String, String>,
    ambiguous: IndexSet<String>,
}

impl ScenarioIndex {
    pub(crate) fn record(&mut self, title: String, block: String) {
        if let Some(previous) = self.scenarios.get_mut(&title) {
            *previous = block;
            self.ambiguous.insert(title);
        } else {
            self.scenarios.insert(title, block);
        }
    }

    /// Content block recorded for `title`.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&str> {
        self.scenarios.get(title).map(String::as_str)
    }

    /// Returns `true` when `title` is present.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.scenarios.contains_key(title)
    }

    /// Number of distinct titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns `true` when no scenario was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Titles in order of first appearance.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }

    /// `(title, block)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scenarios
            .iter()
            .map(|(title, block)| (title.as_str(), block.as_str()))
    }

    /// Titles that occurred more than once, in order of their first repeat.
    pub fn ambiguous(&self) -> impl Iterator<Item = &str> {
        self.ambiguous.iter().map(String::as_str)
    }
}

/// Build the scenario index of `text`.
///
/// # Examples
///
/// ```
/// use scenario_diff::build_scenario_index;
///
/// let index = build_scenario_index("Scenario: A\n  Given x\n\nRule: R\nExample: B\n  Then y");
/// assert_eq!(index.titles().collect::<Vec<_>>(), ["A", "B"]);
/// assert_eq!(index.get("A"), Some("Given x"));
/// ```
#[must_use]
pub fn build_scenario_index(text: &str) -> ScenarioIndex {
    scan_permissive(text).index
}

/// Build the scenario index of `text` under an explicit [`ParseMode`].
///
/// # Errors
///
/// In [`ParseMode::Strict`], returns the first [`ParseError`] in source
/// order, including duplicate scenario titles.
pub fn build_scenario_index_with(
    text: &str,
    mode: ParseMode,
) -> Result<ScenarioIndex, ParseError> {
    scan(text, mode).map(|scan| scan.index)
}
