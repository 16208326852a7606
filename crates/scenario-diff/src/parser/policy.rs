//! Violation handling for the two parse modes.
//!
//! The scanner reports every violation to a [`Policy`]. The permissive
//! policy logs and continues with [`Infallible`] as its error type, so the
//! permissive entry points need no error handling at all.

use std::convert::Infallible;

use crate::errors::ParseError;

pub(crate) trait Policy {
    type Error;

    fn reject(violation: ParseError) -> Result<(), Self::Error>;
}

/// Drop the offending line and keep going.
pub(crate) struct DropViolations;

impl Policy for DropViolations {
    type Error = Infallible;

    fn reject(violation: ParseError) -> Result<(), Self::Error> {
        match violation {
            ParseError::DuplicateScenario { .. }
            | ParseError::DuplicateFeature { .. }
            | ParseError::DuplicateBackground { .. } => log::warn!("{violation}"),
            ParseError::UnrecognisedLine { .. } | ParseError::OrphanStep { .. } => {
                log::trace!("dropped: {violation}");
            }
        }
        Ok(())
    }
}

/// Stop at the first violation.
pub(crate) struct RejectViolations;

impl Policy for RejectViolations {
    type Error = ParseError;

    fn reject(violation: ParseError) -> Result<(), Self::Error> {
        Err(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orphan() -> ParseError {
        ParseError::OrphanStep {
            line: 1,
            text: "Given x".into(),
        }
    }

    #[test]
    fn drop_policy_accepts_violations() {
        assert_eq!(DropViolations::reject(orphan()), Ok(()));
    }

    #[test]
    fn reject_policy_returns_violation() {
        assert_eq!(RejectViolations::reject(orphan()), Err(orphan()));
    }
}
