//! Command-line surface of `dspo`.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::LogFormat;

const LONG_ABOUT: &str = "\
dspo is a local-first tool for capturing and replaying
Linux desktop configuration intent across machines.

It focuses on safe, additive reproduction of a workstation
environment using existing system tools.";

const EXIT_STATUS_HELP: &str = "\
Exit status:
  0  success
  1  generic error
  2  validation error (also used for invalid arguments)
  3  platform error

With --json, failures are reported on stdout as
{\"code\": ..., \"message\": ..., \"hint\": ..., \"details\": ...}.";

/// Root command.
#[derive(Debug, Parser)]
#[command(
    name = "dspo",
    about = "Desktop Profile Orchestrator",
    long_about = LONG_ABOUT,
    after_long_help = EXIT_STATUS_HELP
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Flags accepted by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Emit machine-readable JSON on stdout instead of text
    #[arg(
        long,
        global = true,
        env = "DSPO_JSON",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub json: bool,

    /// Log filter directive, e.g. `debug` or `cli=trace`
    #[arg(
        long,
        global = true,
        env = "DSPO_LOG",
        default_value = "warn",
        value_name = "FILTER"
    )]
    pub log_level: String,

    /// Log line format (logs always go to stderr)
    #[arg(
        long,
        global = true,
        env = "DSPO_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

/// Subcommands of `dspo`.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print version information
    #[command(long_about = "Display version, git commit, and build date for dspo.")]
    Version,

    /// List the stable error codes and the exit status each maps to
    Codes,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_version_with_global_json_after_subcommand() {
        let cli = Cli::try_parse_from(["dspo", "version", "--json"]).unwrap();
        assert_eq!(cli.command, Some(Command::Version));
        assert!(cli.global.json);
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["dspo"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.global.json);
        assert_eq!(cli.global.log_level, "warn");
        assert_eq!(cli.global.log_format, LogFormat::Text);
    }

    #[test]
    fn parses_log_options() {
        let cli = Cli::try_parse_from(["dspo", "--log-level", "debug", "--log-format", "json", "codes"]).unwrap();
        assert_eq!(cli.command, Some(Command::Codes));
        assert_eq!(cli.global.log_level, "debug");
        assert_eq!(cli.global.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let err = Cli::try_parse_from(["dspo", "replay"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn long_help_describes_the_tool() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("local-first tool"));
        assert!(help.contains("Exit status:"));
    }
}
