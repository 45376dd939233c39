//! Rendering of a failed run at the process boundary.
//!
//! Users see the code, message, and hint. Scripts using `--json` also get the
//! details. The cause chain is only ever emitted as a `debug` log event.

use std::io::{self, Write};

use domain::{chain, DomainError};

use crate::OutputFormat;

/// Writes `err` once, in the configured format.
///
/// Text goes to `stderr` as `error: <code>: <message>` plus an optional
/// `hint:` line. JSON writes the envelope as a single line on `stdout`.
pub fn report<O, E>(err: &DomainError, format: OutputFormat, stdout: &mut O, stderr: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    log_chain(err);

    match format {
        OutputFormat::Text => {
            writeln!(stderr, "error: {err}")?;
            if let Some(hint) = err.hint() {
                writeln!(stderr, "hint: {hint}")?;
            }
            stderr.flush()
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *stdout, err)?;
            writeln!(stdout)?;
            stdout.flush()
        }
    }
}

fn log_chain(err: &DomainError) {
    let causes: Vec<String> = chain(err).skip(1).map(|cause| cause.to_string()).collect();
    tracing::debug!(
        code = %err.code(),
        details = ?err.details(),
        causes = ?causes,
        "command failed"
    );
}
