//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cvlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render resume data to LaTeX
    Render {
        /// Path to the resume JSON file
        data: PathBuf,

        /// Template id to render against
        #[arg(short, long)]
        template: Option<String>,

        /// Templates directory (overrides cvlab.toml)
        #[arg(long)]
        templates_dir: Option<PathBuf>,

        /// Render against a template file instead of a stored template
        #[arg(long, conflicts_with = "template")]
        template_file: Option<PathBuf>,

        /// Output .tex path (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Enhance content before rendering
        #[arg(long)]
        enhance: bool,

        /// Job description to steer enhancement
        #[arg(long, requires = "enhance")]
        job_description: Option<String>,
    },

    /// Show a template's detected style
    Style {
        /// Template id to analyze
        template: String,

        /// Templates directory (overrides cvlab.toml)
        #[arg(long)]
        templates_dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile a .tex file to PDF
    Compile {
        /// Path to the .tex file
        input: PathBuf,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}
