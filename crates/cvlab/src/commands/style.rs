//! Style command - show a template's detected formatting conventions

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use cvlab_core::{FsTemplateStore, StyleAnalyzer, TemplateStore};

use crate::output::print_json;

pub fn run(
    template: String,
    templates_dir: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let (dir, _config) = super::resolve_templates_dir(templates_dir)?;
    if verbose {
        println!("{} Loading template '{}' from '{}'", "→".cyan(), template, dir.display());
    }

    let store = FsTemplateStore::new(dir);
    let source = store.load(&template)?;
    let style = StyleAnalyzer::new().analyze(&template, &source);

    if json {
        print_json(&serde_json::to_string_pretty(&style)?)?;
        return Ok(());
    }

    let commands = if style.custom_commands.is_empty() {
        "(none)".to_string()
    } else {
        style
            .custom_commands
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!(
        "template:        {template}\n\
         custom commands: {commands}\n\
         sections:        {}\n\
         itemize:         {}\n\
         spacing:         {:?}\n\
         header:          {:?}",
        style.uses_sections, style.uses_itemize, style.spacing, style.header_style
    );
    Ok(())
}
