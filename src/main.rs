use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vector_compare::{compare, load_vectors, render, OutputFormat, PairingMode};

/// Cosine similarity between vectors stored as JSON arrays
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Vector files; the first one is the reference unless --all-pairs is set
    #[arg(required = true, num_args = 2..)]
    files: Vec<PathBuf>,

    /// Score every pair of files instead of the first against the rest
    #[arg(short, long)]
    all_pairs: bool,

    /// Decimal places in text output
    #[arg(short, long, default_value_t = 4)]
    precision: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if args.all_pairs {
        PairingMode::AllPairs
    } else {
        PairingMode::Reference
    };

    let vectors = load_vectors(&args.files)?;
    info!(count = vectors.len(), ?mode, "comparing vectors");

    let comparisons = compare(&vectors, mode).context("Failed to compare vectors")?;
    println!("{}", render(&comparisons, args.format, args.precision)?);

    Ok(())
}
