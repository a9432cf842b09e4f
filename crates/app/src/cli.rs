//! Command-line arguments and property source assembly.

use std::path::PathBuf;

use clap::Parser;
use stencil_application::{ApplicationResult, PropertyLoader};
use stencil_domain::{
    DomainResult, KEY_DEFAULT_VALUE_SEPARATOR, KEY_ENABLE_DEFAULT_VALUE, PropertySource,
    PropertySources,
};

/// Name of the in-memory source holding `--set` and flag values.
pub const COMMAND_LINE_SOURCE: &str = "command-line";

/// Substitute `${placeholders}` in a template from property files
#[derive(Parser, Debug)]
#[command(name = "stencil", version)]
#[command(about = "Substitute ${placeholders} in text from property files", long_about = None)]
pub struct Args {
    /// Template to read (stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Property file (.properties, .json, .yaml, .yml); later files take precedence
    #[arg(short, long = "properties", value_name = "FILE")]
    pub properties: Vec<PathBuf>,

    /// Set a property, overriding every file
    #[arg(short = 'D', long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Honor `${key:default}` placeholders
    #[arg(long)]
    pub enable_defaults: bool,

    /// Separator between key and default value
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Fail if any placeholder is left unresolved
    #[arg(long)]
    pub strict: bool,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Builds the highest-precedence source from `--set` and the flags.
    ///
    /// Flags are applied after `--set`, so they win over an explicit
    /// assignment of the same reserved key.
    pub fn command_line_source(&self) -> DomainResult<PropertySource> {
        let mut source = PropertySource::empty(COMMAND_LINE_SOURCE);
        for assignment in &self.set {
            source.insert_assignment(assignment)?;
        }
        if self.enable_defaults {
            source.insert(KEY_ENABLE_DEFAULT_VALUE, "true");
        }
        if let Some(separator) = &self.separator {
            source.insert(KEY_DEFAULT_VALUE_SEPARATOR, separator.as_str());
        }
        Ok(source)
    }
}

/// Loads every `--properties` file and layers them under the command-line source.
pub fn build_sources(
    args: &Args,
    loader: &impl PropertyLoader,
) -> ApplicationResult<PropertySources> {
    let mut sources = PropertySources::new();

    for path in &args.properties {
        let source = loader.load(path)?;
        tracing::info!(source = source.name(), entries = source.len(), "loaded properties");
        sources.push_front(source);
    }

    sources.push_front(args.command_line_source()?);
    Ok(sources)
}
