//! Stdout/file emission for command results.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

/// Print a JSON payload followed by a newline.
pub fn print_json(payload: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{payload}")
}

/// Emit rendered LaTeX: written to `path` with a confirmation line when
/// one is given, otherwise streamed to stdout.
pub fn emit_latex(latex: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, latex)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{latex}")?;
        }
    }
    Ok(())
}
