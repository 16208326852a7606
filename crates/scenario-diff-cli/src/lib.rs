//! Command-line front end for `scenario-diff`.
//!
//! This crate is the I/O boundary around the pure `scenario_diff` library:
//! it reads files (extracting scenario blocks from markdown), applies
//! configuration, sets up logging and renders results.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod source;
