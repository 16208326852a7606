//! Helpers for rendering command output.

use std::io::Write;

use eyre::{Context, Result};
use scenario_diff::ScenarioDiff;
use serde::Serialize;

/// Write a line-per-title change summary.
///
/// Added titles are prefixed `+`, modified `~`, removed `-` and ambiguous
/// `!`. An empty report prints a single explanatory line.
///
/// # Errors
///
/// Returns an error when the writer fails.
pub fn write_diff_summary(writer: &mut dyn Write, diff: &ScenarioDiff) -> Result<()> {
    let groups = [
        ('+', &diff.added),
        ('~', &diff.modified),
        ('-', &diff.removed),
    ];
    for (marker, titles) in groups {
        for title in titles {
            writeln!(writer, "{marker} {title}")
                .wrap_err_with(|| format!("failed to write change for scenario '{title}'"))?;
        }
    }
    for title in &diff.ambiguous {
        writeln!(writer, "! {title} (duplicate title; compared last occurrence)")
            .wrap_err_with(|| format!("failed to write warning for scenario '{title}'"))?;
    }
    if diff.is_empty() {
        writeln!(writer, "no scenario changes").wrap_err("failed to write empty diff summary")?;
    }
    Ok(())
}

/// Write `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error when serialization or the writer fails.
pub fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .wrap_err("failed to serialize output to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}

/// Write pre-rendered text unchanged.
///
/// # Errors
///
/// Returns an error when the writer fails.
pub fn write_text(writer: &mut dyn Write, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .wrap_err("failed to write text output")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(diff: &ScenarioDiff) -> eyre::Result<String> {
        let mut buffer = Vec::new();
        write_diff_summary(&mut buffer, diff)?;
        Ok(String::from_utf8(buffer)?)
    }

    #[test]
    fn summary_lists_each_group_in_order() -> eyre::Result<()> {
        let diff = ScenarioDiff {
            added: vec!["C".into()],
            modified: vec!["B".into()],
            removed: vec!["A".into()],
            ambiguous: vec!["B".into()],
        };
        assert_eq!(
            render(&diff)?,
            "+ C\n~ B\n- A\n! B (duplicate title; compared last occurrence)\n"
        );
        Ok(())
    }

    #[test]
    fn empty_summary_says_so() -> eyre::Result<()> {
        assert_eq!(render(&ScenarioDiff::default())?, "no scenario changes\n");
        Ok(())
    }

    #[test]
    fn json_output_ends_with_newline() -> eyre::Result<()> {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &["a", "b"])?;
        let text = String::from_utf8(buffer)?;
        assert!(text.ends_with("]\n"));
        let parsed: Vec<String> = serde_json::from_str(&text)?;
        assert_eq!(parsed, ["a", "b"]);
        Ok(())
    }
}
