//! Structured logging to stderr.
//!
//! Stdout carries command output, so logs always go to stderr. Records the
//! library emits through the `log` facade are bridged into the same
//! subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `SCENARIO_DIFF_LOG_LEVEL`
/// 3. Default configuration value (`warn`)
///
/// If a global subscriber is already set, this function silently keeps it.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    // The first subscriber wins, which is the expected behaviour in tests.
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn init_logging_is_idempotent() {
        let config = CliConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Debug), false);
        let filter = filter_from_config(&config);
        assert_eq!(filter.to_string(), "debug");
    }
}
