//! Canonical text rendering of a [`Document`].
//!
//! Output layout:
//!
//! - `Feature:` line and a blank line, when a feature name is present;
//! - `Background:` with steps indented one level, then a blank line;
//! - each top-level `Scenario:` with steps indented one level, then a blank
//!   line;
//! - each `Rule:` at column zero, its scenarios as `Example:` indented one
//!   level with steps indented two levels, each scenario followed by a blank
//!   line.
//!
//! Step keywords keep the spelling recorded on the [`Step`] when it still
//! reads as that keyword; otherwise the canonical keyword is written. Step
//! text is trimmed, and a step whose text is empty is left out because a
//! bare keyword line does not parse back as a step.

use std::fmt::{self, Write};

use crate::document::{Document, Scenario, Step};
use crate::keyword::StepKeyword;

const INDENT: &str = "  ";

fn write_header(
    out: &mut impl Write,
    depth: usize,
    label: &str,
    title: Option<&str>,
) -> fmt::Result {
    write_indent(out, depth)?;
    match title {
        Some(title) if !title.is_empty() => writeln!(out, "{label}: {title}"),
        _ => writeln!(out, "{label}:"),
    }
}

fn write_indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn spelling(step: &Step) -> &str {
    let keyword = step.keyword.trim();
    match keyword.parse::<StepKeyword>() {
        Ok(kind) if kind == step.kind => keyword,
        _ => step.kind.as_str(),
    }
}

fn write_steps(out: &mut impl Write, depth: usize, steps: &[Step]) -> fmt::Result {
    for step in steps {
        let text = step.text.trim();
        if text.is_empty() {
            continue;
        }
        write_indent(out, depth)?;
        writeln!(out, "{} {text}", spelling(step))?;
    }
    Ok(())
}

fn write_scenario(
    out: &mut impl Write,
    depth: usize,
    label: &str,
    scenario: &Scenario,
) -> fmt::Result {
    write_header(out, depth, label, scenario.title.as_deref())?;
    write_steps(out, depth + 1, &scenario.steps)?;
    writeln!(out)
}

fn write_document(out: &mut impl Write, doc: &Document) -> fmt::Result {
    if let Some(name) = doc.feature_name.as_deref() {
        write_header(out, 0, "Feature", Some(name))?;
        writeln!(out)?;
    }
    if let Some(background) = doc.background.as_ref() {
        write_header(out, 0, "Background", None)?;
        write_steps(out, 1, &background.steps)?;
        writeln!(out)?;
    }
    for scenario in &doc.scenarios {
        write_scenario(out, 0, "Scenario", scenario)?;
    }
    for rule in &doc.rules {
        write_header(out, 0, "Rule", Some(&rule.title))?;
        for scenario in &rule.scenarios {
            write_scenario(out, 1, "Example", scenario)?;
        }
    }
    Ok(())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_document(f, self)
    }
}

/// Render `doc` as canonical text.
///
/// Serializing is idempotent through a parse:
/// `serialize(&parse(&serialize(d))) == serialize(d)`.
///
/// # Examples
///
/// ```
/// use scenario_diff::{parse, serialize};
///
/// let doc = parse("Feature: Cart\nScenario: Add\ngiven an item");
/// assert_eq!(serialize(&doc), "Feature: Cart\n\nScenario: Add\n  given an item\n\n");
/// ```
#[must_use]
pub fn serialize(doc: &Document) -> String {
    doc.to_string()
}
