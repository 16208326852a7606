//! Command configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `SCENARIO_DIFF_`; command-line flags take precedence over both.

use std::env;
use std::str::FromStr;

use scenario_diff::ParseMode;

use crate::error::CliError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "SCENARIO_DIFF_LOG_LEVEL";
/// Environment variable selecting the parse mode.
pub const MODE_VAR: &str = "SCENARIO_DIFF_MODE";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so normal output stays clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every dropped line.
    Trace,
    /// Scan and diff summaries.
    Debug,
    /// Informational messages.
    Info,
    /// Collapsed duplicates and repeated headers.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration shared by every subcommand.
///
/// # Environment Variables
///
/// - `SCENARIO_DIFF_LOG_LEVEL`: trace, debug, info, warn or error
/// - `SCENARIO_DIFF_MODE`: permissive or strict
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level written to stderr.
    pub log_level: LogLevel,
    /// How malformed scenario text is handled.
    pub mode: ParseMode,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        let mode = match lookup(MODE_VAR) {
            Some(val) => val
                .parse()
                .map_err(|err| CliError::InvalidConfig(format!("{MODE_VAR}: {err}")))?,
            None => ParseMode::default(),
        };
        Ok(Self { log_level, mode })
    }

    /// Apply command-line overrides on top of environment-based values.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, strict: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if strict {
            self.mode = ParseMode::Strict;
        }
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("Debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level.as_filter_str(), "warn");
        assert_eq!(config.mode, ParseMode::Permissive);
    }

    #[test]
    fn reads_variables() {
        let config =
            CliConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "debug"), (MODE_VAR, "strict")]))
                .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.mode, ParseMode::Strict);
    }

    #[test]
    fn rejects_invalid_mode() {
        let err = CliConfig::from_lookup(lookup_from(&[(MODE_VAR, "lenient")])).unwrap_err();
        assert!(err.to_string().contains("SCENARIO_DIFF_MODE"));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Trace), true);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.mode, ParseMode::Strict);

        let config = CliConfig::default().apply_overrides(None, false);
        assert_eq!(config, CliConfig::default());
    }
}
