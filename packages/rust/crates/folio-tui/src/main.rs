//! main.rs - `folio` binary entry point
//!
//! Usage:
//!   folio [--data data/content-data.json]
//!
//! Headless mode loads the document, logs a summary and prints the status
//! line without touching the terminal:
//!   folio --headless

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use folio_tui::{DEFAULT_DATA_PATH, NavigationState, TuiRenderer, load_sections, status_line};

/// Folio - terminal navigator for portfolio content
#[derive(clap::Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Compiled content document
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Load the data and exit without rendering
    #[arg(long, default_value = "false")]
    headless: bool,
}

fn run_headless(state: &NavigationState) {
    for section in state.sections() {
        info!("{} {}: {} items", section.icon, section.name, section.items.len());
    }
    println!("{}", status_line(state));
}

fn main() -> Result<()> {
    folio_tui::init_logger();

    let args = Args::parse();
    let mut state = NavigationState::new(load_sections(&args.data));

    if args.headless {
        info!("Running in headless mode (--headless flag set)");
        run_headless(&state);
        return Ok(());
    }

    match TuiRenderer::new() {
        Ok(mut renderer) => renderer.run(&mut state)?,
        Err(e) => {
            warn!("TUI init failed: {e}. Switching to headless mode.");
            run_headless(&state);
        }
    }

    info!("folio shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["folio"]);
        assert_eq!(args.data, PathBuf::from("data/content-data.json"));
        assert!(!args.headless);
    }

    #[test]
    fn test_args_parsing_headless() {
        let args = Args::parse_from(["folio", "--data", "/tmp/site.json", "--headless"]);
        assert_eq!(args.data, PathBuf::from("/tmp/site.json"));
        assert!(args.headless);
    }
}
