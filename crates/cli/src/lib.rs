//! Library half of the `dspo` binary.
//!
//! Everything the binary does lives here so it can be driven from tests with
//! in-memory writers. `main.rs` only parses arguments, installs logging, and
//! calls [`run`].
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`args`] | clap definitions for the root command and subcommands |
//! | [`config`] | `CliConfig`, the resolved runtime configuration |
//! | [`commands`] | Subcommand implementations |
//! | [`exit`] | `ErrorCode` to `ExitCategory` policy |
//! | [`report`] | Rendering of a failed run (plain text or JSON envelope) |
//! | [`observability`] | `tracing-subscriber` setup |

use std::io::Write;

use domain::ExitCategory;

pub mod args;
pub mod commands;
pub mod config;
pub mod exit;
pub mod observability;
pub mod report;

pub use args::{Cli, Command, GlobalArgs};
pub use commands::CommandError;
pub use config::{CliConfig, LogFormat, OutputFormat};

/// Runs `command` and returns how the process should terminate.
pub fn run<O, E>(command: Option<Command>, config: &CliConfig, stdout: &mut O, stderr: &mut E) -> ExitCategory
where
    O: Write,
    E: Write,
{
    let result = commands::execute(command, config, stdout);
    conclude(result, config, stdout, stderr)
}

/// Turns a command outcome into an exit category, reporting any failure.
///
/// This is the only place that renders a [`domain::DomainError`]. Commands
/// return errors; they never print them.
pub fn conclude<O, E>(
    result: Result<(), CommandError>,
    config: &CliConfig,
    stdout: &mut O,
    stderr: &mut E,
) -> ExitCategory
where
    O: Write,
    E: Write,
{
    match result {
        Ok(()) => ExitCategory::Success,
        Err(CommandError::Domain(err)) => {
            let category = exit::category_for(err.code());
            if let Err(io_err) = report::report(&err, config.output, stdout, stderr) {
                tracing::error!(error = %io_err, "failed to write error report");
            }
            category
        }
        Err(CommandError::Io(io_err)) => {
            tracing::error!(error = %io_err, "failed to write command output");
            ExitCategory::GenericError
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use domain::{DomainError, ErrorCode};
    use serde_json::Value;

    use super::*;

    fn json_config() -> CliConfig {
        CliConfig {
            output: OutputFormat::Json,
            ..CliConfig::default()
        }
    }

    #[test]
    fn successful_command_exits_with_success() {
        let (mut stdout, mut stderr) = (Vec::<u8>::new(), Vec::<u8>::new());
        let category = run(Some(Command::Version), &CliConfig::default(), &mut stdout, &mut stderr);

        assert_eq!(category, ExitCategory::Success);
        assert!(!stdout.is_empty());
        assert!(stderr.is_empty());
    }

    #[test]
    fn domain_failure_is_reported_and_mapped() {
        let err = DomainError::wrap(
            ErrorCode::UnsupportedPlatform,
            "Fedora 39 is not supported (supported: current and N-1).",
            "os-release parse detail",
        )
        .with_hint("Upgrade to Fedora current.")
        .with_detail("detected", "fedora-39");

        let (mut stdout, mut stderr) = (Vec::<u8>::new(), Vec::<u8>::new());
        let category = conclude(Err(err.into()), &json_config(), &mut stdout, &mut stderr);

        assert_eq!(category, ExitCategory::PlatformError);
        assert_eq!(category.status(), 3);

        let value: Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(value["code"], "UNSUPPORTED_PLATFORM");
        assert_eq!(value["details"]["detected"], "fedora-39");
        assert_eq!(value.as_object().map(|o| o.len()), Some(4));
        assert!(!String::from_utf8_lossy(&stdout).contains("os-release"));
    }

    #[test]
    fn text_failure_goes_to_stderr() {
        let err = DomainError::new(ErrorCode::InvalidProfileSchema, "profile.yaml: missing `packages`");

        let (mut stdout, mut stderr) = (Vec::<u8>::new(), Vec::<u8>::new());
        let category = conclude(Err(err.into()), &CliConfig::default(), &mut stdout, &mut stderr);

        assert_eq!(category, ExitCategory::ValidationError);
        assert!(stdout.is_empty());
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "error: INVALID_PROFILE_SCHEMA: profile.yaml: missing `packages`\n"
        );
    }

    #[test]
    fn output_failure_is_generic() {
        let (mut stdout, mut stderr) = (Vec::<u8>::new(), Vec::<u8>::new());
        let err = CommandError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        let category = conclude(Err(err), &CliConfig::default(), &mut stdout, &mut stderr);

        assert_eq!(category, ExitCategory::GenericError);
        assert!(stdout.is_empty() && stderr.is_empty());
    }
}
