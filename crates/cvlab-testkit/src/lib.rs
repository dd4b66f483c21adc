//! Test utilities for cvlab
//!
//! This crate provides shared testing utilities used across the cvlab
//! workspace: workspace-local temp directories, canned template fixtures
//! in both marker dialects, and sample résumé data.

mod fixtures;

pub use fixtures::{
    compact_monolithic_template, macro_loop_template, minimal_resume, sample_resume,
    sectioned_template, write_template,
};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single
/// location that is gitignored and easy to clean up manually if needed.
/// The returned `TempDir` cleans up automatically on drop.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the temporary
/// directory cannot be created.
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}
