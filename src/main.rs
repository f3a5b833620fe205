use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use assetwash_core::{png_files, wash_file, write_placeholder, WashOutcome};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "assetwash", about = "Asset catalog cleanup tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert near-white backgrounds to transparency across the catalog
    Wash {
        /// Catalog root (defaults to the configured root)
        path: Option<PathBuf>,
    },
    /// Regenerate the placeholder icon (white disc on a transparent canvas)
    Placeholder {
        /// Output path (defaults to the configured output)
        path: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Error reading catalog.toml: {}", e);
        process::exit(1);
    });

    match cli.command {
        Commands::Wash { path } => cmd_wash(&config, path),
        Commands::Placeholder { path } => cmd_placeholder(&config, path),
    }
}

fn cmd_wash(config: &Config, path: Option<PathBuf>) {
    let root = path.unwrap_or_else(|| PathBuf::from(&config.catalog.root));
    let threshold = config.catalog.threshold;
    log::debug!("Using threshold {}", threshold);

    println!("Washing catalog: {}", root.display());

    let files = png_files(&root, &config.catalog.skip).unwrap_or_else(|e| {
        eprintln!("Error listing {}: {}", root.display(), e);
        process::exit(1);
    });

    let mut cleaned = 0u32;
    let mut unchanged = 0u32;
    let mut failed = 0u32;

    for path in files {
        match wash_file(&path, threshold) {
            Ok(WashOutcome::Cleaned) => {
                println!("Processed: {}", path.display());
                cleaned += 1;
            }
            Ok(WashOutcome::Unchanged) => {
                println!("Skipped (no white background found): {}", path.display());
                unchanged += 1;
            }
            Err(e) => {
                // One bad file never aborts the batch.
                println!("Error processing {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    println!(
        "Done: {} processed, {} skipped, {} failed",
        cleaned, unchanged, failed
    );
}

fn cmd_placeholder(config: &Config, path: Option<PathBuf>) {
    let output = path.unwrap_or_else(|| PathBuf::from(&config.placeholder.output));

    if let Err(e) = write_placeholder(&output) {
        eprintln!("Error writing {}: {}", output.display(), e);
        process::exit(1);
    }

    println!("Restored placeholder at {}", output.display());
}
