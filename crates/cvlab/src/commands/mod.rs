//! CLI command implementations

pub mod compile;
pub mod render;
pub mod style;

use std::path::PathBuf;

use cvlab_core::Config;

/// Resolve the templates directory: explicit flag first, then cvlab.toml
/// in the current directory, then the built-in default.
pub fn resolve_templates_dir(flag: Option<PathBuf>) -> anyhow::Result<(PathBuf, Config)> {
    let root = std::env::current_dir()?;
    let config = Config::load(&root)?;
    let dir = match flag {
        Some(dir) => dir,
        None => config.templates_dir(&root),
    };
    Ok((dir, config))
}
