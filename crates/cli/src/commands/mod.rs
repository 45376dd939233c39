//! Subcommand implementations.
//!
//! Commands write their results to the supplied writer and return failures
//! as [`CommandError`]. Rendering a failure is the caller's job.

use std::io::{self, Write};

use clap::CommandFactory;
use domain::DomainError;
use thiserror::Error;

use crate::{Cli, CliConfig, Command};

pub mod codes;
pub mod version;

/// Why a command did not complete.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A domain failure to be reported to the user.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Command output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Dispatches `command`. With no subcommand the root help is printed, as the
/// root command has no behaviour of its own.
pub fn execute<W: Write>(command: Option<Command>, config: &CliConfig, out: &mut W) -> Result<(), CommandError> {
    tracing::debug!(?command, output = ?config.output, "dispatching command");

    match command {
        None => {
            Cli::command().write_long_help(out)?;
            out.flush()?;
            Ok(())
        }
        Some(Command::Version) => version::run(config, out),
        Some(Command::Codes) => codes::run(config, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_prints_help() {
        let mut out: Vec<u8> = Vec::new();
        execute(None, &CliConfig::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("local-first tool"));
        assert!(text.contains("version"));
    }

    #[test]
    fn domain_errors_convert_without_losing_code() {
        let err: CommandError = DomainError::new(domain::ErrorCode::LockHeld, "lock held").into();
        assert_eq!(err.to_string(), "LOCK_HELD: lock held");
        assert!(matches!(err, CommandError::Domain(e) if e.code() == domain::ErrorCode::LockHeld));
    }
}
