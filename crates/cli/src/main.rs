//! dspo CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** from flags and `DSPO_*` environment variables.
//! 2. **Wire observability** by installing the `tracing-subscriber` layer that
//!    every crate's events flow through.
//! 3. **Run the command** and translate its outcome into a process exit status.

use std::io;
use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    let config = cli::CliConfig::from(&args.global);
    cli::observability::init(&config);

    let category = cli::run(args.command, &config, &mut io::stdout().lock(), &mut io::stderr().lock());
    category.into()
}
