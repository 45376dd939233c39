//! Resolved runtime configuration.
//!
//! clap merges flags, `DSPO_*` environment variables, and defaults into
//! [`crate::GlobalArgs`]; [`CliConfig`] is the typed view the rest of the
//! binary consumes.

use clap::ValueEnum;

/// Where and how command results and failures are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text. Failures go to stderr.
    Text,
    /// One JSON document on stdout per run, failures included.
    Json,
}

/// Format of log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line events.
    Text,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Format of command results and failure reports.
    pub output: OutputFormat,
    /// `EnvFilter` directive string.
    pub log_level: String,
    /// Format of log lines on stderr.
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log_level: "warn".to_owned(),
            log_format: LogFormat::Text,
        }
    }
}

impl From<&crate::GlobalArgs> for CliConfig {
    fn from(args: &crate::GlobalArgs) -> Self {
        Self {
            output: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            log_level: args.log_level.clone(),
            log_format: args.log_format,
        }
    }
}
