mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing();
    }

    let result = match cli.command {
        Commands::Render {
            data,
            template,
            templates_dir,
            template_file,
            out,
            enhance,
            job_description,
        } => commands::render::run(
            data,
            template,
            templates_dir,
            template_file,
            out,
            enhance,
            job_description,
            cli.verbose,
        ),
        Commands::Style {
            template,
            templates_dir,
            json,
        } => commands::style::run(template, templates_dir, json, cli.verbose),
        Commands::Compile { input, out_dir } => commands::compile::run(input, out_dir, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}
