//! `dspo version`.
//!
//! Commit and build date are injected at compile time through the
//! `DSPO_GIT_COMMIT` and `DSPO_BUILD_DATE` environment variables.

use std::io::Write;

use serde::Serialize;

use super::CommandError;
use crate::{CliConfig, OutputFormat};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GIT_COMMIT: &str = match option_env!("DSPO_GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

pub const BUILD_DATE: &str = match option_env!("DSPO_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Build metadata as reported by `dspo version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Package version, e.g. `0.1.0-dev`.
    pub version: &'static str,
    /// Git commit the binary was built from.
    pub commit: &'static str,
    /// Build date.
    pub built: &'static str,
}

impl VersionInfo {
    /// Metadata of the running binary.
    pub const fn current() -> Self {
        Self {
            version: VERSION,
            commit: GIT_COMMIT,
            built: BUILD_DATE,
        }
    }
}

/// Writes the version report to `out` in the configured output format.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<(), CommandError> {
    let info = VersionInfo::current();
    match config.output {
        OutputFormat::Text => {
            writeln!(out, "dspo version {}", info.version)?;
            writeln!(out, "  commit: {}", info.commit)?;
            writeln!(out, "  built:  {}", info.built)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &info).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
