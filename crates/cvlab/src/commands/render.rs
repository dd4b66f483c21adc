//! Render command - turn resume JSON into LaTeX source

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use cvlab_core::model::ResumeData;
use cvlab_core::{FsTemplateStore, RenderOptions, Renderer};

use crate::output::emit_latex;

#[allow(clippy::too_many_arguments)]
pub fn run(
    data: PathBuf,
    template: Option<String>,
    templates_dir: Option<PathBuf>,
    template_file: Option<PathBuf>,
    out: Option<PathBuf>,
    enhance: bool,
    job_description: Option<String>,
    verbose: bool,
) -> Result<()> {
    let (dir, config) = super::resolve_templates_dir(templates_dir)?;
    let template_id = template.unwrap_or_else(|| config.templates.default.clone());

    if verbose {
        println!("{} Reading resume data '{}'", "→".cyan(), data.display());
    }
    let json = fs::read_to_string(&data)
        .with_context(|| format!("failed to read resume data '{}'", data.display()))?;
    let resume: ResumeData = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse resume data '{}'", data.display()))?;

    let custom_template = match template_file {
        Some(path) => {
            if verbose {
                println!("{} Using template file '{}'", "→".cyan(), path.display());
            }
            Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("failed to read template '{}'", path.display()))?,
            )
        }
        None => {
            if verbose {
                println!("{} Using template '{}' from '{}'", "→".cyan(), template_id, dir.display());
            }
            None
        }
    };

    let renderer = Renderer::new(Arc::new(FsTemplateStore::new(dir)));
    let options = RenderOptions {
        enhance,
        job_description,
        custom_template,
    };
    let latex = renderer.render(&resume, &template_id, &options)?;

    emit_latex(&latex, out.as_deref())
}
