use crate::camsort_core::cli::{Cli, Mode};
use crate::camsort_core::error::{CamsortError, Result};
use std::path::PathBuf;

/// Extensions matched when organizing by date without an explicit --filetype.
const DATE_MODE_EXTENSIONS: &[&str] = &["jpg", "png", "heic", "mov", "mp4"];

/// Default extension when organizing by brand without an explicit --filetype.
const DEFAULT_FILETYPE: &str = "jpg";

/// Immutable configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub filetype: Option<String>,
    pub mode: Mode,
    pub normalize: bool,
}

impl Config {
    /// Validate the parsed CLI arguments into a run configuration.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if !cli.srcdir.exists() {
            return Err(CamsortError::PathNotFound(cli.srcdir.clone()));
        }
        if !cli.srcdir.is_dir() {
            return Err(CamsortError::NotADirectory(cli.srcdir.clone()));
        }

        if cli.mode == Mode::ByBrand && cli.brand.is_none() {
            return Err(CamsortError::Argument(
                "--brand is required when organizing by brand".to_string(),
            ));
        }

        // "JPG" and ".jpg" both mean jpg
        let filetype = cli
            .filetype
            .as_deref()
            .map(|ft| ft.trim_start_matches('.').to_lowercase());

        Ok(Config {
            source_dir: cli.srcdir.clone(),
            output_dir: cli.outdir.clone(),
            brand: cli.brand.clone(),
            model: cli.model.clone(),
            filetype,
            mode: cli.mode,
            normalize: cli.normalize,
        })
    }

    /// Extensions the enumeration pass should match for this run.
    pub fn extensions(&self) -> Vec<String> {
        if let Some(ft) = &self.filetype {
            return vec![ft.clone()];
        }

        match self.mode {
            Mode::ByDate => DATE_MODE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            Mode::ByBrand => vec![DEFAULT_FILETYPE.to_string()],
        }
    }
}
