//! Logging configuration
//!
//! Line modes log to stderr. The TUI owns the terminal, so it only logs when a
//! log file is given.
//!
//! The `SPELLING_BEE_LOG` environment variable overrides the level with a full
//! `EnvFilter` directive, e.g. `SPELLING_BEE_LOG=spelling_bee::game=debug`.

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "SPELLING_BEE_LOG";

/// Where log events go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    File(PathBuf),
    Off,
}

impl LogOutput {
    /// Pick an output for a front end
    #[must_use]
    pub fn for_mode(owns_terminal: bool, file: Option<PathBuf>) -> Self {
        match (file, owns_terminal) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Off,
            (None, false) => Self::Stderr,
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub output: LogOutput,
}

impl LoggingConfig {
    #[must_use]
    pub fn new(level: impl Into<String>, output: LogOutput) -> Self {
        Self {
            level: level.into(),
            output,
        }
    }

    /// Filter from the environment, falling back to the configured level
    ///
    /// # Errors
    /// Returns an error if the configured level is not a valid directive.
    pub fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .with_context(|| format!("Invalid log level: '{}'", self.level)),
        }
    }

    /// Install the global subscriber
    ///
    /// Call once at startup.
    ///
    /// # Errors
    /// Returns an error if the level is invalid, the log file cannot be
    /// opened, or a subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let filter = match self.output {
            LogOutput::Off => return Ok(()),
            _ => self.filter()?,
        };

        match &self.output {
            LogOutput::Stderr => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
            LogOutput::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?;

                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .try_init()
            }
            LogOutput::Off => Ok(()),
        }
        .map_err(|e| anyhow!(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_without_file_is_silent() {
        assert_eq!(LogOutput::for_mode(true, None), LogOutput::Off);
    }

    #[test]
    fn line_mode_logs_to_stderr() {
        assert_eq!(LogOutput::for_mode(false, None), LogOutput::Stderr);
    }

    #[test]
    fn file_wins_in_any_mode() {
        let path = PathBuf::from("bee.log");
        assert_eq!(
            LogOutput::for_mode(true, Some(path.clone())),
            LogOutput::File(path.clone())
        );
        assert_eq!(
            LogOutput::for_mode(false, Some(path.clone())),
            LogOutput::File(path)
        );
    }

    #[test]
    fn off_never_installs() {
        let config = LoggingConfig::new("not a level[", LogOutput::Off);
        assert!(config.init().is_ok());
    }

    #[test]
    fn config_new() {
        let config = LoggingConfig::new("debug", LogOutput::Stderr);
        assert_eq!(config.level, "debug");
        assert_eq!(config.output, LogOutput::Stderr);
    }
}
