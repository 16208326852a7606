//! Structured representation of a scenario document.
//!
//! Values here are plain data: the parser builds them, the serializer walks
//! them, and neither keeps any state between calls.

use crate::keyword::StepKeyword;

/// One line of scenario behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Semantic category of the keyword.
    pub kind: StepKeyword,
    /// The keyword exactly as written in the source, e.g. `given` or `AND`.
    pub keyword: String,
    /// Free-form text following the keyword.
    pub text: String,
}

impl Step {
    /// Create a step spelled with the canonical keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_diff::{Step, StepKeyword};
    ///
    /// let step = Step::new(StepKeyword::Given, "a cart");
    /// assert_eq!(step.keyword, "Given");
    /// assert_eq!(step.text, "a cart");
    /// ```
    #[must_use]
    pub fn new(kind: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            kind,
            keyword: kind.as_str().to_string(),
            text: text.into(),
        }
    }

    /// Create a step that keeps an author's spelling of the keyword.
    #[must_use]
    pub fn with_spelling(
        kind: StepKeyword,
        keyword: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            keyword: keyword.into(),
            text: text.into(),
        }
    }
}

/// A named, ordered sequence of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scenario {
    /// Title following `Scenario:` or `Example:`; `None` when left blank.
    pub title: Option<String>,
    /// Steps in source order.
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Create an empty scenario with the given title.
    #[must_use]
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            steps: Vec::new(),
        }
    }

    /// Title used as the scenario's identity key; untitled scenarios map to
    /// the empty string.
    #[must_use]
    pub fn key(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// Steps shared by every scenario of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Background {
    /// Steps in source order.
    pub steps: Vec<Step>,
}

/// A named group of scenarios one level below the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rule {
    /// Title following `Rule:`.
    pub title: String,
    /// Scenarios in source order.
    pub scenarios: Vec<Scenario>,
}

impl Rule {
    /// Create an empty rule with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scenarios: Vec::new(),
        }
    }
}

/// A parsed scenario document.
///
/// # Examples
///
/// ```
/// use scenario_diff::parse;
///
/// let doc = parse("Feature: Cart\nScenario: Add\n  Given an empty cart");
/// assert_eq!(doc.feature_name.as_deref(), Some("Cart"));
/// assert_eq!(doc.scenarios.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    /// Name following the first `Feature:` header.
    pub feature_name: Option<String>,
    /// The document's background, if any.
    pub background: Option<Background>,
    /// Scenarios outside any rule.
    pub scenarios: Vec<Scenario>,
    /// Rules with their nested scenarios.
    pub rules: Vec<Rule>,
}

impl Document {
    /// Returns `true` when the document holds no feature name, background,
    /// scenario or rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feature_name.is_none()
            && self.background.is_none()
            && self.scenarios.is_empty()
            && self.rules.is_empty()
    }

    /// Iterate over every scenario, top-level ones first, then each rule's
    /// scenarios in rule order.
    pub fn all_scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios
            .iter()
            .chain(self.rules.iter().flat_map(|rule| rule.scenarios.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_empty() {
        assert!(Document::default().is_empty());
    }

    #[test]
    fn untitled_scenario_keys_to_empty_string() {
        assert_eq!(Scenario::new(None).key(), "");
        assert_eq!(Scenario::new(Some("A".into())).key(), "A");
    }

    #[test]
    fn all_scenarios_flattens_rules_after_top_level() {
        let mut rule = Rule::new("R");
        rule.scenarios.push(Scenario::new(Some("nested".into())));
        let doc = Document {
            scenarios: vec![Scenario::new(Some("top".into()))],
            rules: vec![rule],
            ..Document::default()
        };
        let keys: Vec<_> = doc.all_scenarios().map(Scenario::key).collect();
        assert_eq!(keys, ["top", "nested"]);
    }
}
