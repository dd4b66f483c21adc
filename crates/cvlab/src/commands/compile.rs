//! Compile command - run a LaTeX engine over generated source

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use cvlab_core::CvlabError;

/// Environment override for the LaTeX binary.
const LATEX_BINARY_ENV: &str = "CVLAB_LATEX_BINARY";
const DEFAULT_LATEX_BINARY: &str = "pdflatex";

/// Lines of engine output echoed back on failure.
const STDERR_TAIL: usize = 20;

pub fn run(input: PathBuf, out_dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    if !input.is_file() {
        bail!("Input file '{}' not found", input.display());
    }
    let out_dir = match out_dir {
        Some(dir) => dir,
        None => input
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create '{}'", out_dir.display()))?;

    let binary =
        std::env::var(LATEX_BINARY_ENV).unwrap_or_else(|_| DEFAULT_LATEX_BINARY.to_string());
    if verbose {
        println!("{} Compiling with '{}'", "→".cyan(), binary);
    }

    let output = Command::new(&binary)
        .arg("-interaction=nonstopmode")
        .arg("-output-directory")
        .arg(&out_dir)
        .arg(&input)
        .output()
        .with_context(|| format!("failed to launch '{binary}'"))?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let lines: Vec<&str> = stdout.lines().chain(stderr.lines()).collect();
        let tail = lines[lines.len().saturating_sub(STDERR_TAIL)..].join("\n");
        return Err(CvlabError::BuildFailed(format!(
            "'{}' exited with {}\n{}",
            binary, output.status, tail
        ))
        .into());
    }

    println!("{} Compiled {}", "✓".green(), input.display());
    Ok(())
}
