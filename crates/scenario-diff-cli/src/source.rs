//! Loading scenario text from files.
//!
//! Scenario blocks usually live inside markdown documentation as fenced code
//! blocks tagged `gherkin` or `feature`. Markdown inputs are reduced to the
//! text of those blocks; any other input is used verbatim.

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

const FENCE_LANGUAGES: [&str; 2] = ["gherkin", "feature"];

/// An open fenced block: the fence character and its run length.
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    fn open(line: &str) -> Option<(Self, &str)> {
        let trimmed = line.trim_start();
        let marker = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
        let len = trimmed.chars().take_while(|&c| c == marker).count();
        if len < 3 {
            return None;
        }
        let info = trimmed.get(len..).unwrap_or_default().trim();
        Some((Self { marker, len }, info))
    }

    fn closes(self, line: &str) -> bool {
        let trimmed = line.trim();
        let run = trimmed.chars().take_while(|&c| c == self.marker).count();
        run >= self.len && run == trimmed.chars().count()
    }
}

fn is_scenario_language(info: &str) -> bool {
    info.split_whitespace()
        .next()
        .is_some_and(|lang| FENCE_LANGUAGES.iter().any(|l| lang.eq_ignore_ascii_case(l)))
}

/// Extract the contents of every `gherkin` or `feature` fenced block.
///
/// Blocks are joined with a blank line in document order. An unterminated
/// block runs to the end of the input.
///
/// # Examples
///
/// ```
/// use scenario_diff_cli::source::extract_fenced_blocks;
///
/// let md = "# Cart\n\n```gherkin\nScenario: Add\n  Given x\n```\n\n```rust\nfn main() {}\n```\n";
/// assert_eq!(extract_fenced_blocks(md), "Scenario: Add\n  Given x");
/// ```
#[must_use]
pub fn extract_fenced_blocks(markdown: &str) -> String {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut open: Option<(Fence, bool)> = None;

    for line in markdown.lines() {
        match open {
            Some((fence, keep)) => {
                if fence.closes(line) {
                    open = None;
                } else if keep {
                    if let Some(block) = blocks.last_mut() {
                        block.push(line);
                    }
                }
            }
            None => {
                if let Some((fence, info)) = Fence::open(line) {
                    let keep = is_scenario_language(info);
                    if keep {
                        blocks.push(Vec::new());
                    }
                    open = Some((fence, keep));
                }
            }
        }
    }

    tracing::debug!(blocks = blocks.len(), "extracted fenced scenario blocks");
    blocks
        .iter()
        .map(|block| block.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Returns `true` when `path` has a markdown extension.
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

fn read_raw(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_err)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

/// Read the scenario text held by `path`.
///
/// `-` reads stdin. Markdown files are reduced to their scenario blocks.
///
/// # Errors
///
/// Returns [`CliError::Read`] when the input cannot be read as UTF-8 text.
pub fn load_scenarios(path: &Path) -> Result<String, CliError> {
    let raw = read_raw(path)?;
    if is_markdown(path) {
        Ok(extract_fenced_blocks(&raw))
    } else {
        Ok(raw)
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require descriptive panic messages")]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn joins_multiple_blocks_with_blank_line() {
        let md = "```gherkin\nScenario: A\n```\ntext\n~~~feature\nScenario: B\n~~~\n";
        assert_eq!(extract_fenced_blocks(md), "Scenario: A\n\nScenario: B");
    }

    #[test]
    fn skips_other_languages_and_their_contents() {
        let md = "```text\n```gherkin\nScenario: hidden\n```\n";
        assert_eq!(extract_fenced_blocks(md), "");
    }

    #[test]
    fn longer_fence_needs_matching_close() {
        let md = "````gherkin\nScenario: A\n```\nGiven inner\n````\n";
        assert_eq!(extract_fenced_blocks(md), "Scenario: A\n```\nGiven inner");
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let md = "```Gherkin title=cart\nScenario: A\n  Given x";
        assert_eq!(extract_fenced_blocks(md), "Scenario: A\n  Given x");
    }

    #[rstest]
    #[case("docs/cart.md", true)]
    #[case("docs/cart.MARKDOWN", true)]
    #[case("cart.feature", false)]
    #[case("-", false)]
    fn detects_markdown(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_markdown(Path::new(path)), expected);
    }

    #[test]
    fn loads_markdown_and_plain_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let md_path = dir.path().join("doc.md");
        let mut md = std::fs::File::create(&md_path).expect("create markdown");
        writeln!(md, "intro\n```gherkin\nScenario: A\n```").expect("write markdown");

        let plain_path = dir.path().join("a.feature");
        std::fs::write(&plain_path, "intro\nScenario: A\n").expect("write feature");

        assert_eq!(load_scenarios(&md_path).expect("load md"), "Scenario: A");
        assert_eq!(
            load_scenarios(&plain_path).expect("load feature"),
            "intro\nScenario: A\n"
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_scenarios(Path::new("does/not/exist.feature"))
            .expect_err("missing file should fail");
        assert!(matches!(err, CliError::Read { .. }));
    }
}
