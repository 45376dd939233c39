//! `tracing-subscriber` wiring.
//!
//! Logs always go to stderr so stdout stays reserved for command output and
//! the JSON error envelope.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::{CliConfig, LogFormat};

const FALLBACK_FILTER: &str = "warn";

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init(config: &CliConfig) -> bool {
    let filter = build_filter(&config.log_level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    match config.log_format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}

/// Parses `directive`, falling back to `warn` when it is malformed.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn malformed_directive_falls_back() {
        let filter = build_filter("cli=notalevel");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn valid_directive_is_kept() {
        let filter = build_filter("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
