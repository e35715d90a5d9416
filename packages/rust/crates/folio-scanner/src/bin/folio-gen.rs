//! folio-gen - Regenerate the compiled content document.
//!
//! Takes no arguments. Paths come from `folio.yaml` and the `FOLIO_*`
//! environment (see `folio_scanner::config`).
//!
//! Usage:
//!   folio-gen
//!
//! Logging: set `RUST_LOG=debug` to see per-directory scan details.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;

use folio_scanner::{GeneratorConfig, generate};

/// Compile markdown content into the folio navigation document
#[derive(clap::Parser, Debug)]
#[command(name = "folio-gen")]
#[command(author, version, about, long_about = None)]
struct Args {}

fn run() -> Result<()> {
    let config = GeneratorConfig::load();
    generate(&config)
        .with_context(|| format!("writing {}", config.output_path.display()))?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let _args = Args::parse();

    match run() {
        Ok(()) => println!("Content data generated successfully"),
        Err(err) => {
            error!("Error generating content data: {err:#}");
            std::process::exit(1);
        }
    }
}
