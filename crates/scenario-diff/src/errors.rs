//! Error types raised by strict parsing.
//!
//! Permissive entry points never produce these; see
//! [`ParseMode`](crate::ParseMode).

use thiserror::Error;

/// Violations rejected by [`ParseMode::Strict`](crate::ParseMode::Strict).
///
/// Every variant carries the 1-based line number of the offending line.
///
/// # Examples
/// ```
/// use scenario_diff::{ParseError, ParseMode, parse_with};
///
/// let err = parse_with("Given nothing open", ParseMode::Strict).unwrap_err();
/// assert_eq!(err, ParseError::OrphanStep { line: 1, text: "Given nothing open".into() });
/// assert_eq!(err.line(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A non-blank line that is neither a header nor a step.
    #[error("line {line}: unrecognised line `{text}`")]
    UnrecognisedLine {
        /// Line number.
        line: usize,
        /// Trimmed line content.
        text: String,
    },
    /// A step with no background or scenario open to receive it.
    #[error("line {line}: step `{text}` is outside any background or scenario")]
    OrphanStep {
        /// Line number.
        line: usize,
        /// Trimmed line content.
        text: String,
    },
    /// A `Feature:` header after the first one.
    #[error("line {line}: duplicate Feature header (first seen on line {first})")]
    DuplicateFeature {
        /// Line number of the repeated header.
        line: usize,
        /// Line number of the first header.
        first: usize,
    },
    /// A `Background:` header after the first one.
    #[error("line {line}: duplicate Background header (first seen on line {first})")]
    DuplicateBackground {
        /// Line number of the repeated header.
        line: usize,
        /// Line number of the first header.
        first: usize,
    },
    /// A scenario title already used elsewhere in the document.
    #[error("line {line}: duplicate scenario title `{title}` (first seen on line {first})")]
    DuplicateScenario {
        /// Line number of the repeated header.
        line: usize,
        /// Line number of the first header with this title.
        first: usize,
        /// The shared title; empty for untitled scenarios.
        title: String,
    },
}

impl ParseError {
    /// Line number of the offending line.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognisedLine { line, .. }
            | Self::OrphanStep { line, .. }
            | Self::DuplicateFeature { line, .. }
            | Self::DuplicateBackground { line, .. }
            | Self::DuplicateScenario { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unrecognised_line() {
        let err = ParseError::UnrecognisedLine {
            line: 4,
            text: "| a |".into(),
        };
        assert_eq!(err.to_string(), "line 4: unrecognised line `| a |`");
    }

    #[test]
    fn formats_duplicate_scenario() {
        let err = ParseError::DuplicateScenario {
            line: 9,
            first: 2,
            title: "Checkout".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 9: duplicate scenario title `Checkout` (first seen on line 2)"
        );
        assert_eq!(err.line(), 9);
    }

    #[test]
    fn formats_duplicate_headers() {
        let feature = ParseError::DuplicateFeature { line: 3, first: 1 };
        let background = ParseError::DuplicateBackground { line: 7, first: 2 };
        assert!(feature.to_string().contains("duplicate Feature header"));
        assert!(background.to_string().contains("first seen on line 2"));
    }
}
