#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use downtable::MarkdownTable;
use downtable::config::{self, load_configuration, load_configuration_from};
use downtable::importers::{CsvOptions, get_importer_from_name, importer_name_for_path};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;
use tracing::event;

/// Render a CSV or JSON table as markdown
#[derive(Parser)]
#[command(name = "downtable")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file, standard input when omitted
    file: Option<PathBuf>,

    /// Input format, inferred from the file extension by default
    #[arg(short, long, value_parser = ["csv", "json"])]
    format: Option<String>,

    /// Allow stray quotes in CSV fields
    #[arg(long)]
    lazy_quotes: bool,

    /// Strip leading whitespace from CSV fields
    #[arg(long)]
    trim_leading_space: bool,

    /// Configuration file to use instead of downtable.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the table to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_configuration_from(path),
        None => load_configuration(),
    };
    loaded.context("Failed to load configuration")?;
    let config = config::get().context("Failed to get configuration")?;

    // Logs go to stderr, stdout only carries the table
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.as_str().into()),
        )
        .init();

    let options = CsvOptions {
        lazy_quotes: cli.lazy_quotes || config.lazy_quotes,
        trim_leading_space: cli.trim_leading_space || config.trim_leading_space,
    };

    let format = match (&cli.format, &cli.file) {
        (Some(format), _) => format.as_str(),
        (None, Some(path)) => importer_name_for_path(path),
        (None, None) => "csv",
    };
    let importer = get_importer_from_name(format, options)?;

    let mut input: Box<dyn Read> = match &cli.file {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin().lock()),
    };

    let mut table = MarkdownTable::new();
    importer
        .import(&mut input, &mut table)
        .with_context(|| format!("Failed to read {} input", format))?;

    let written = match &cli.output {
        Some(path) => {
            let markdown = table
                .to_markdown_bytes()
                .context("Failed to render markdown table")?;
            std::fs::write(path, &markdown)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            markdown.len()
        }
        None => table
            .print_markdown()
            .context("Failed to render markdown table")?,
    };

    event!(Level::DEBUG, "Wrote {} bytes of markdown", written);
    Ok(())
}
