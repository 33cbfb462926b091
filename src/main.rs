//! # Image Resizer - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Rifiuto delle combinazioni di flag non valide prima di qualsiasi I/O
//! - Inizializzazione del sistema di logging con `tracing`
//! - Avvio dell'optimizer e stampa del report su stdout
//!
//! ## Esempio di utilizzo:
//! ```bash
//! image-resizer --check
//! image-resizer --write --safe
//! ```

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use image_resizer::{Config, ImageOptimizer, RunMode};

#[derive(Parser)]
#[command(name = "image-resizer")]
#[command(about = "Resize images exceeding target size.")]
struct Args {
    /// Only report images that exceed target size
    #[arg(short, long)]
    check: bool,

    /// Resize images exceeding target size
    #[arg(short, long)]
    write: bool,

    /// Backup original before resizing (requires --write)
    #[arg(short, long)]
    safe: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Turn the flags into a `RunMode`, reporting bad combinations as clap usage errors.
fn run_mode(args: &Args) -> std::result::Result<RunMode, clap::Error> {
    RunMode::from_flags(args.check, args.write, args.safe)
        .map_err(|e| Args::command().error(ErrorKind::ArgumentConflict, e.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Flag errors exit here, before the image root is even resolved.
    let mode = run_mode(&args).unwrap_or_else(|e| e.exit());

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::for_executable(mode)?;
    let optimizer = ImageOptimizer::new(config)?;
    let stats = optimizer.run();

    for line in stats.report_lines(optimizer.config()) {
        println!("{line}");
    }

    Ok(())
}
