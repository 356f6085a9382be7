// src/main.rs
mod config;
mod extractors;
mod pipeline;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use config::Config;
use utils::AppError;

/// Split a monolithic stylesheet into base fragment files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the stylesheet to split
    #[arg(short, long, env = "CSS_SPLITTER_SOURCE")]
    source: PathBuf,

    /// Output root for the generated fragments
    #[arg(short, long, env = "CSS_SPLITTER_OUTPUT_DIR", default_value = "./src/styles")]
    output_dir: PathBuf,

    /// Write an empty fragment instead of failing when a marker is missing
    #[arg(long)]
    allow_missing: bool,

    /// Debug mode - save a report of where each marker occurs
    #[arg(short, long)]
    debug: bool,

    /// Save a JSON manifest of the written fragments
    #[arg(long)]
    manifest: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            allow_missing: args.allow_missing,
            debug: args.debug,
            manifest: args.manifest,
            ..Config::new(args.source, args.output_dir)
        }
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Run the fixed extraction rules
    let config = Config::from(args);
    let summary = pipeline::run(&config)?;

    tracing::debug!(
        "Wrote {} fragments ({} files) under {}",
        summary.fragments.len(),
        summary.written.len(),
        config.output_dir.display()
    );

    Ok(())
}
