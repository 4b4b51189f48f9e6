//! kireme command-line interface
//!
//! Reads text from files or standard input, segments it with the selected
//! language profile and prints one sentence per line (or a JSON document).

mod input;
mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kireme_core::{Segmenter, SegmenterConfig};

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "kireme", version, about = "Split text into sentences")]
struct Cli {
    /// Input files; reads standard input when none are given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Language code selecting the punctuation profile
    #[arg(short, long, default_value = "en", value_name = "CODE")]
    language: String,

    /// Document-type hint forwarded to the segmenter
    #[arg(long, value_name = "TYPE")]
    doc_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let segmenter = Segmenter::with_config(SegmenterConfig {
        language: cli.language.clone(),
        doc_type: cli.doc_type.clone(),
    });
    log::info!("segmenting with the '{}' profile", segmenter.profile().code);

    let mut sentences = Vec::new();
    for text in input::read_all(&cli.files)? {
        sentences.extend(segmenter.segment(&text));
    }
    log::info!("emitted {} sentences", sentences.len());

    let rendered = output::render(&sentences, cli.format)?;
    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
