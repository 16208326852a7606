//! Parse mode selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How the parser treats input it cannot place.
///
/// `Permissive` drops unrecognised lines, orphan steps and repeated headers
/// silently, and lets a repeated scenario title overwrite the earlier block.
/// `Strict` turns each of those into a [`ParseError`](crate::ParseError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Accept any input; the only failure mode is silent information loss.
    #[default]
    Permissive,
    /// Reject malformed input at the first offending line.
    Strict,
}

impl ParseMode {
    /// Return the mode name as used on the command line and in the
    /// environment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }

    /// Returns `true` for [`ParseMode::Strict`].
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parse mode '{0}', expected one of: permissive, strict")]
pub struct ParseModeError(pub String);

impl FromStr for ParseMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
