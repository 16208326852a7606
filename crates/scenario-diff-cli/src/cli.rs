//! Command dispatch for the `scenario-diff` entrypoint.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use scenario_diff::{
    Document, ParseMode, ScenarioDiff, ScenarioIndex, build_scenario_index_with, diff_indexes,
    parse_with, serialize,
};
use tracing::{debug, info};

use scenario_diff_cli::config::{CliConfig, LogLevel};
use scenario_diff_cli::error::CliError;
use scenario_diff_cli::output::{write_diff_summary, write_json, write_text};
use scenario_diff_cli::source::load_scenarios;

/// Parse, format and diff Gherkin-style scenario blocks.
#[derive(Parser, Debug)]
#[command(name = "scenario-diff", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Reject unrecognised lines, orphan steps and duplicate headers or titles.
    #[arg(long, global = true)]
    pub strict: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the parsed document as JSON.
    Parse(InputArgs),
    /// Print the canonical form of the scenario text.
    Fmt(InputArgs),
    /// Print the scenario index (title to content block) as JSON.
    Index(InputArgs),
    /// Report scenarios added, modified or removed between two versions.
    Diff(DiffArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Scenario file, markdown file or `-` for stdin.
    file: PathBuf,
}

#[derive(Args, Debug)]
struct DiffArgs {
    /// Old version.
    old: PathBuf,
    /// New version.
    new: PathBuf,
    /// Emit JSON instead of a human-readable summary.
    #[arg(long)]
    json: bool,
    /// Exit with status 1 when any scenario changed.
    #[arg(long)]
    exit_code: bool,
}

impl Cli {
    /// Merge environment configuration with command-line overrides.
    pub(crate) fn config(&self) -> Result<CliConfig, CliError> {
        Ok(CliConfig::from_env()?.apply_overrides(self.log_level, self.strict))
    }
}

pub(crate) fn run(cli: Cli, config: &CliConfig) -> Result<ExitCode> {
    info!(mode = %config.mode, command = command_name(&cli.command), "running");
    let mut stdout = io::stdout().lock();
    let code = match cli.command {
        Commands::Parse(args) => {
            let doc = load_document(&args.file, config.mode)?;
            write_json(&mut stdout, &doc)?;
            ExitCode::SUCCESS
        }
        Commands::Fmt(args) => {
            let doc = load_document(&args.file, config.mode)?;
            write_text(&mut stdout, &serialize(&doc))?;
            ExitCode::SUCCESS
        }
        Commands::Index(args) => {
            let index = load_index(&args.file, config.mode)?;
            write_json(&mut stdout, &index)?;
            ExitCode::SUCCESS
        }
        Commands::Diff(args) => {
            if handle_diff(&mut stdout, &args, config.mode)? {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
    };
    stdout.flush().wrap_err("failed to flush output to stdout")?;
    Ok(code)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Parse(_) => "parse",
        Commands::Fmt(_) => "fmt",
        Commands::Index(_) => "index",
        Commands::Diff(_) => "diff",
    }
}

/// Returns `true` when `--exit-code` was given and something changed.
fn handle_diff(writer: &mut dyn Write, args: &DiffArgs, mode: ParseMode) -> Result<bool> {
    let old = load_index(&args.old, mode)?;
    let new = load_index(&args.new, mode)?;
    let diff: ScenarioDiff = diff_indexes(&old, &new);
    debug!(
        changes = diff.change_count(),
        ambiguous = diff.ambiguous.len(),
        "computed scenario diff"
    );
    if args.json {
        write_json(writer, &diff)?;
    } else {
        write_diff_summary(writer, &diff)?;
    }
    Ok(args.exit_code && !diff.is_empty())
}

fn load_document(path: &Path, mode: ParseMode) -> Result<Document> {
    let text = load_scenarios(path)?;
    let doc = parse_with(&text, mode).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(doc)
}

fn load_index(path: &Path, mode: ParseMode) -> Result<ScenarioIndex> {
    let text = load_scenarios(path)?;
    let index = build_scenario_index_with(&text, mode).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(index)
}
