//! `dspo codes`: the error-code catalog with the exit status each code maps to.

use std::io::Write;

use domain::{ErrorCode, ExitCategory};
use serde::Serialize;

use super::CommandError;
use crate::{exit, CliConfig, OutputFormat};

#[derive(Debug, Serialize)]
struct CatalogEntry {
    code: ErrorCode,
    exit_category: ExitCategory,
    exit_status: u8,
}

fn catalog() -> Vec<CatalogEntry> {
    ErrorCode::ALL
        .iter()
        .map(|&code| {
            let category = exit::category_for(code);
            CatalogEntry {
                code,
                exit_category: category,
                exit_status: category.status(),
            }
        })
        .collect()
}

pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<(), CommandError> {
    let entries = catalog();
    match config.output {
        OutputFormat::Text => {
            let width = entries.iter().map(|e| e.code.as_str().len()).max().unwrap_or(0);
            for entry in &entries {
                writeln!(
                    out,
                    "{:<width$}  {}  {}",
                    entry.code.as_str(),
                    entry.exit_status,
                    entry.exit_category,
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &entries).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
