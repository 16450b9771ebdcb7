use crate::camsort_core::config::Config;
use crate::camsort_core::error::{CamsortError, Result};
use crate::camsort_core::metadata::extract_metadata;
use crate::camsort_core::rename::date_token;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of an organizing strategy. Every candidate lands in exactly one
/// of the two counters.
#[derive(Debug, Default)]
pub struct OrganizeStats {
    pub moved: usize,
    pub skipped: usize,
}

impl std::fmt::Display for OrganizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} files moved ({} skipped)", self.moved, self.skipped)
    }
}

/// A candidate that passed metadata identification in brand mode.
#[derive(Debug)]
struct IdentifiedFile {
    path: PathBuf,
    model: Option<String>,
}

/// Move every candidate whose name starts with a `YYYY-MM-DD` token into
/// `outdir/<token>/`. Candidates without the token are skipped with a
/// diagnostic.
pub fn organize_by_date(config: &Config, candidates: &[PathBuf]) -> Result<OrganizeStats> {
    println!("Organizing by date...");

    let mut stats = OrganizeStats::default();
    for path in candidates {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("Skipping non-UTF-8 file name: {}", path.display());
            stats.skipped += 1;
            continue;
        };

        let Some(date) = date_token(name) else {
            log::warn!("No date prefix in {}, skipping", path.display());
            stats.skipped += 1;
            continue;
        };

        let dest_dir = config.output_dir.join(date);
        fs::create_dir_all(&dest_dir)?;

        if let Err(e) = fs::rename(path, dest_dir.join(name)) {
            log::warn!("Failed to move {}: {}", path.display(), e);
            stats.skipped += 1;
            continue;
        }

        println!("Moving {} to {}", path.display(), dest_dir.display());
        stats.moved += 1;
    }

    Ok(stats)
}

/// Keep candidates whose embedded camera make matches the configured brand
/// (and model, when filtered), then move them flat into the output
/// directory. Metadata failures are logged and skipped, never fatal.
pub fn organize_by_brand(config: &Config, candidates: &[PathBuf]) -> Result<OrganizeStats> {
    let brand = config.brand.as_deref().ok_or_else(|| {
        CamsortError::Argument("--brand is required when organizing by brand".to_string())
    })?;

    println!("Finding files with camera metadata...");

    let bar_style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap();
    let bar = ProgressBar::new(candidates.len() as u64).with_style(bar_style);
    bar.set_message("Reading metadata");

    let mut stats = OrganizeStats::default();
    let mut kept: Vec<IdentifiedFile> = Vec::new();

    for path in candidates {
        let metadata = extract_metadata(path);
        bar.inc(1);

        match metadata {
            Err(e) => {
                log::warn!("Error on {}: {}", path.display(), e);
                stats.skipped += 1;
            }
            Ok(None) => {
                log::info!("No metadata in {}, skipping", path.display());
                stats.skipped += 1;
            }
            Ok(Some(meta)) => {
                let Some(make) = meta.make else {
                    log::info!("No camera make in {}, skipping", path.display());
                    stats.skipped += 1;
                    continue;
                };

                if !make.eq_ignore_ascii_case(brand) {
                    log::info!("{} was taken with a {}, skipping", path.display(), make);
                    stats.skipped += 1;
                    continue;
                }

                kept.push(IdentifiedFile {
                    path: path.clone(),
                    model: meta.model,
                });
            }
        }
    }

    bar.finish_and_clear();

    if let Some(wanted) = config.model.as_deref() {
        kept.retain(|file| {
            if model_matches(file.model.as_deref(), Some(wanted)) {
                true
            } else {
                log::info!("Model mismatch for {}, skipping", file.path.display());
                stats.skipped += 1;
                false
            }
        });
    }

    if kept.is_empty() {
        println!("No files were found");
        return Ok(stats);
    }

    fs::create_dir_all(&config.output_dir)?;

    for file in &kept {
        match move_into(&file.path, &config.output_dir) {
            Ok(()) => {
                println!("Moving {} to {}", file.path.display(), config.output_dir.display());
                stats.moved += 1;
            }
            Err(e) => {
                log::warn!("Failed to move {}: {}", file.path.display(), e);
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

/// Move a file into a directory, keeping its name.
fn move_into(path: &Path, dir: &Path) -> std::io::Result<()> {
    let name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
    })?;
    fs::rename(path, dir.join(name))
}

/// Model filter predicate: no filter passes everything; a filter requires a
/// case-insensitive match, so files without a model are excluded.
fn model_matches(model: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => match model {
            Some(model) => model.eq_ignore_ascii_case(wanted),
            None => false,
        },
    }
}
