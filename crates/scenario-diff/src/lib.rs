//! Parser and semantic differ for Gherkin-style scenario blocks.
//!
//! The crate turns a scenario text block (Feature / Background / Rule /
//! Scenario / step lines) into a [`Document`], renders a document back to
//! canonical text, and compares two versions of a block to report which
//! named scenarios were added, modified or removed.
//!
//! Everything here is a pure function of its input text. Nothing is cached
//! between calls and nothing touches the file system.
//!
//! ```
//! use scenario_diff::{diff_scenarios, parse, serialize};
//!
//! let old = "Feature: Cart\nScenario: Add\n  Given an empty cart\n  When I add an apple";
//! let new = "Feature: Cart\nScenario: Add\n  Given an empty cart\n  When I add a pear";
//!
//! let doc = parse(new);
//! assert_eq!(serialize(&parse(&serialize(&doc))), serialize(&doc));
//! assert_eq!(diff_scenarios(old, new).modified, ["Add"]);
//! ```

mod classify;
mod diff;
mod document;
mod errors;
mod index;
mod keyword;
mod mode;
mod parser;
mod serialize;

pub use classify::{LineKind, classify_line};
pub use diff::{ScenarioDiff, diff_indexes, diff_scenarios, diff_scenarios_with};
pub use document::{Background, Document, Rule, Scenario, Step};
pub use errors::ParseError;
pub use index::{ScenarioIndex, build_scenario_index, build_scenario_index_with};
pub use keyword::{StepKeyword, StepKeywordParseError};
pub use mode::{ParseMode, ParseModeError};
pub use parser::{parse, parse_with};
pub use serialize::serialize;
