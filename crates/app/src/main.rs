//! Stencil - Main Entry Point
//!
//! Reads a template from a file or stdin, substitutes its `${placeholders}`
//! from the given property files, and writes the result.

mod cli;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use stencil_application::SubstituteText;
use stencil_infrastructure::FilePropertyLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Args;

fn main() {
    // Logs go to stderr so stdout carries only the substituted text
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&Args::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    tracing::info!("Starting Stencil v{}", env!("CARGO_PKG_VERSION"));

    let sources = cli::build_sources(args, &FilePropertyLoader::new())
        .context("Failed to load properties")?;
    let template = read_input(args.input.as_deref())?;
    let use_case = SubstituteText::new(sources);

    let resolved = if args.strict {
        use_case.execute_strict(&template)?
    } else {
        let output = use_case.execute(&template);
        if !output.is_complete {
            tracing::warn!(unresolved = ?output.unresolved, "placeholders left unresolved");
        }
        output.resolved
    };

    write_output(args.output.as_deref(), &resolved)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display())),
        None => {
            let mut template = String::new();
            io::stdin()
                .read_to_string(&mut template)
                .context("Failed to read template from stdin")?;
            Ok(template)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}
