//! Line classification.
//!
//! Every non-blank line of a scenario document maps to exactly one
//! [`LineKind`]. Headers are recognised by their literal, case-sensitive
//! prefix; step keywords are matched case-insensitively and must be followed
//! by whitespace.

use crate::keyword::StepKeyword;

const FEATURE: &str = "Feature:";
const BACKGROUND: &str = "Background:";
const RULE: &str = "Rule:";
const SCENARIO: &str = "Scenario:";
const EXAMPLE: &str = "Example:";

/// Structural tag for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Feature:` header with its name, `None` when blank.
    Feature(Option<&'a str>),
    /// `Background:` header.
    Background,
    /// `Rule:` header with its title.
    Rule(&'a str),
    /// `Scenario:` or `Example:` header with its title, `None` when blank.
    Scenario(Option<&'a str>),
    /// A step line.
    Step {
        /// Semantic keyword.
        kind: StepKeyword,
        /// Keyword as written.
        keyword: &'a str,
        /// Text after the keyword and its separating whitespace.
        text: &'a str,
    },
    /// Anything else: comments, tags, tables, doc strings, prose.
    Other,
}

impl LineKind<'_> {
    /// Returns `true` for the five header kinds that end a scenario block.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(
            self,
            Self::Feature(_) | Self::Background | Self::Rule(_) | Self::Scenario(_)
        )
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn classify_step(line: &str) -> Option<LineKind<'_>> {
    let (keyword, rest) = line.split_once(char::is_whitespace)?;
    let kind = keyword.parse::<StepKeyword>().ok()?;
    Some(LineKind::Step {
        kind,
        keyword,
        text: rest.trim_start(),
    })
}

/// Classify one line.
///
/// Callers are expected to skip blank lines; a blank line passed here is
/// reported as [`LineKind::Other`]. Classification never fails.
///
/// # Examples
///
/// ```
/// use scenario_diff::{LineKind, StepKeyword, classify_line};
///
/// assert_eq!(classify_line("Example: checkout"), LineKind::Scenario(Some("checkout")));
/// assert_eq!(
///     classify_line("and the total is 3"),
///     LineKind::Step { kind: StepKeyword::And, keyword: "and", text: "the total is 3" },
/// );
/// assert_eq!(classify_line("| a | b |"), LineKind::Other);
/// ```
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(FEATURE) {
        LineKind::Feature(non_empty(rest))
    } else if line.starts_with(BACKGROUND) {
        LineKind::Background
    } else if let Some(rest) = line.strip_prefix(RULE) {
        LineKind::Rule(rest.trim())
    } else if let Some(rest) = line
        .strip_prefix(SCENARIO)
        .or_else(|| line.strip_prefix(EXAMPLE))
    {
        LineKind::Scenario(non_empty(rest))
    } else {
        classify_step(line).unwrap_or(LineKind::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Feature: Shopping", LineKind::Feature(Some("Shopping")))]
    #[case("Feature:", LineKind::Feature(None))]
    #[case("Background:", LineKind::Background)]
    #[case("Background: shared setup", LineKind::Background)]
    #[case("Rule: Totals", LineKind::Rule("Totals"))]
    #[case("Rule:", LineKind::Rule(""))]
    #[case("Scenario: Add item", LineKind::Scenario(Some("Add item")))]
    #[case("Example: Add item", LineKind::Scenario(Some("Add item")))]
    #[case("Scenario:   ", LineKind::Scenario(None))]
    #[case("  Scenario: padded  ", LineKind::Scenario(Some("padded")))]
    fn recognises_headers(#[case] line: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(classify_line(line), expected);
    }

    #[rstest]
    #[case("Given a cart", StepKeyword::Given, "Given", "a cart")]
    #[case("when I pay", StepKeyword::When, "when", "I pay")]
    #[case("THEN it works", StepKeyword::Then, "THEN", "it works")]
    #[case("And\tmore", StepKeyword::And, "And", "more")]
    #[case("But   not this", StepKeyword::But, "But", "not this")]
    fn recognises_steps_and_keeps_spelling(
        #[case] line: &str,
        #[case] kind: StepKeyword,
        #[case] keyword: &str,
        #[case] text: &str,
    ) {
        assert_eq!(classify_line(line), LineKind::Step { kind, keyword, text });
    }

    #[rstest]
    #[case("Given")]
    #[case("Givenx a cart")]
    #[case("feature: lower-case header")]
    #[case("Scenario Outline: not supported")]
    #[case("# comment")]
    #[case("@tag")]
    #[case("| a | b |")]
    #[case("\"\"\"")]
    #[case("")]
    fn falls_back_to_other(#[case] line: &str) {
        assert_eq!(classify_line(line), LineKind::Other);
    }

    #[test]
    fn header_predicate_excludes_steps_and_other() {
        assert!(LineKind::Background.is_header());
        assert!(LineKind::Feature(None).is_header());
        assert!(!LineKind::Other.is_header());
        assert!(!classify_line("Given x").is_header());
    }
}
