//! Document parsing.
//!
//! One fold over the source lines builds both views of a document: the
//! structured [`Document`] and the flat [`ScenarioIndex`] used for diffing.
//! Both consume the same [`classify_line`] result, so they always agree on
//! where a scenario starts.
//!
//! The two views differ only in what they keep. The document keeps steps and
//! drops everything else. The index keeps every raw line after a scenario
//! header (blank lines, comments, tables) up to the next Feature, Background,
//! Rule, Scenario or Example header.

mod policy;
mod state;

use std::collections::HashMap;

use crate::classify::{LineKind, classify_line};
use crate::document::{Document, Step};
use crate::errors::ParseError;
use crate::index::ScenarioIndex;
use crate::mode::ParseMode;

use policy::{DropViolations, Policy, RejectViolations};
use state::Open;

/// Both views produced by a single scan.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub document: Document,
    pub index: ScenarioIndex,
}

/// Raw lines of the scenario currently feeding the index.
#[derive(Debug)]
struct Capture<'a> {
    title: String,
    lines: Vec<&'a str>,
}

impl Capture<'_> {
    fn block(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}

/// First line on which each kind of header appeared.
#[derive(Debug, Default)]
struct Seen {
    feature: Option<usize>,
    background: Option<usize>,
    titles: HashMap<String, usize>,
}

#[derive(Debug, Default)]
struct Scanner<'a> {
    document: Document,
    open: Open,
    capture: Option<Capture<'a>>,
    index: ScenarioIndex,
    seen: Seen,
}

impl<'a> Scanner<'a> {
    fn feed<P: Policy>(mut self, number: usize, raw: &'a str) -> Result<Self, P::Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.capture_line(raw);
            return Ok(self);
        }

        let kind = classify_line(trimmed);
        if kind.is_header() {
            self.finish_capture();
        } else {
            self.capture_line(raw);
        }

        match kind {
            LineKind::Feature(name) => self.on_feature::<P>(number, name)?,
            LineKind::Background => self.on_background::<P>(number)?,
            LineKind::Rule(title) => {
                self.open = std::mem::take(&mut self.open).open_rule(&mut self.document, title);
            }
            LineKind::Scenario(title) => self.on_scenario::<P>(number, title)?,
            LineKind::Step {
                kind,
                keyword,
                text,
            } => {
                let step = Step::with_spelling(kind, keyword, text);
                if self.open.push_step(step).is_err() {
                    P::reject(ParseError::OrphanStep {
                        line: number,
                        text: trimmed.to_string(),
                    })?;
                }
            }
            LineKind::Other => P::reject(ParseError::UnrecognisedLine {
                line: number,
                text: trimmed.to_string(),
            })?,
        }
        Ok(self)
    }

    fn on_feature<P: Policy>(&mut self, number: usize, name: Option<&str>) -> Result<(), P::Error> {
        match self.seen.feature {
            Some(first) => P::reject(ParseError::DuplicateFeature {
                line: number,
                first,
            })?,
            None => self.seen.feature = Some(number),
        }
        if self.document.feature_name.is_none() {
            self.document.feature_name = name.map(str::to_string);
        }
        Ok(())
    }

    fn on_background<P: Policy>(&mut self, number: usize) -> Result<(), P::Error> {
        match self.seen.background {
            Some(first) => P::reject(ParseError::DuplicateBackground {
                line: number,
                first,
            })?,
            None => self.seen.background = Some(number),
        }
        self.open = std::mem::take(&mut self.open).open_background(&mut self.document);
        Ok(())
    }

    fn on_scenario<P: Policy>(
        &mut self,
        number: usize,
        title: Option<&str>,
    ) -> Result<(), P::Error> {
        let key = title.unwrap_or_default();
        match self.seen.titles.get(key).copied() {
            Some(first) => P::reject(ParseError::DuplicateScenario {
                line: number,
                first,
                title: key.to_string(),
            })?,
            None => {
                self.seen.titles.insert(key.to_string(), number);
            }
        }
        self.capture = Some(Capture {
            title: key.to_string(),
            lines: Vec::new(),
        });
        self.open = std::mem::take(&mut self.open).open_scenario(&mut self.document, title);
        Ok(())
    }

    fn capture_line(&mut self, raw: &'a str) {
        if let Some(capture) = self.capture.as_mut() {
            capture.lines.push(raw);
        }
    }

    fn finish_capture(&mut self) {
        if let Some(capture) = self.capture.take() {
            let block = capture.block();
            self.index.record(capture.title, block);
        }
    }

    fn finish(mut self) -> Scan {
        self.finish_capture();
        self.open.close(&mut self.document);
        log::debug!(
            "scanned document: {} top-level scenarios, {} rules, {} indexed titles",
            self.document.scenarios.len(),
            self.document.rules.len(),
            self.index.len()
        );
        Scan {
            document: self.document,
            index: self.index,
        }
    }
}

fn scan_with<P: Policy>(text: &str) -> Result<Scan, P::Error> {
    let scanner = text
        .lines()
        .enumerate()
        .try_fold(Scanner::default(), |scanner, (idx, raw)| {
            scanner.feed::<P>(idx + 1, raw)
        })?;
    Ok(scanner.finish())
}

/// Scan `text` under the given mode.
pub(crate) fn scan(text: &str, mode: ParseMode) -> Result<Scan, ParseError> {
    match mode {
        ParseMode::Permissive => Ok(scan_permissive(text)),
        ParseMode::Strict => scan_with::<RejectViolations>(text),
    }
}

/// Scan `text`, dropping whatever does not fit.
pub(crate) fn scan_permissive(text: &str) -> Scan {
    let Ok(scan) = scan_with::<DropViolations>(text);
    scan
}

/// Parse a scenario document, silently dropping lines that do not fit.
///
/// # Examples
///
/// ```
/// use scenario_diff::parse;
///
/// let doc = parse(
///     "Feature: Cart\n\
///      Background:\n  Given a shop\n\
///      Rule: Totals\n  Example: sum\n    Then it adds up",
/// );
/// assert_eq!(doc.background.map(|bg| bg.steps.len()), Some(1));
/// assert_eq!(doc.rules[0].scenarios[0].title.as_deref(), Some("sum"));
/// assert!(parse("").is_empty());
/// ```
#[must_use]
pub fn parse(text: &str) -> Document {
    scan_permissive(text).document
}

/// Parse a scenario document under an explicit [`ParseMode`].
///
/// # Errors
///
/// In [`ParseMode::Strict`], returns the first [`ParseError`] in source
/// order. [`ParseMode::Permissive`] never fails.
pub fn parse_with(text: &str, mode: ParseMode) -> Result<Document, ParseError> {
    scan(text, mode).map(|scan| scan.document)
}
