use anyhow::Result;
use camsort::camsort_core::{Cli, Config, Mode};
use camsort::camsort_core::{enumerate_candidates, normalize_names, organize_by_brand, organize_by_date};
use clap::Parser;
use simplelog::{CombinedLogger, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            simplelog::Config::default(),
            File::create("camsort.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let config = Config::from_cli(&cli)?;

    let candidates = enumerate_candidates(&config)?;
    if candidates.is_empty() {
        println!("No files were found");
        return Ok(());
    }

    let candidates = if config.normalize {
        normalize_names(candidates)?
    } else {
        candidates
    };

    let stats = match config.mode {
        Mode::ByDate => organize_by_date(&config, &candidates)?,
        Mode::ByBrand => organize_by_brand(&config, &candidates)?,
    };

    if stats.moved > 0 {
        println!("\nOrganize complete!");
        println!("  {} files moved to {}", stats.moved, config.output_dir.display());
        if stats.skipped > 0 {
            println!("  {} files skipped", stats.skipped);
        }
    }

    Ok(())
}
