use crate::camsort_core::config::Config;
use crate::camsort_core::error::Result;
use glob::{MatchOptions, Pattern, glob_with};
use std::path::PathBuf;

/// Enumerate the candidate files for a run: one non-recursive glob per
/// configured extension over the source directory. Matching is
/// case-insensitive so `IMG_0001.JPG` is found by `jpg`.
///
/// Pattern and directory read errors are fatal for the run.
pub fn enumerate_candidates(config: &Config) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    // Escape the directory portion so bracket characters in path names
    // don't act as metacharacters.
    let root = Pattern::escape(&config.source_dir.display().to_string());

    let mut candidates = Vec::new();
    for ext in config.extensions() {
        let pattern = format!("{}/*.{}", root, ext);
        log::debug!("Enumerating {}", pattern);

        for entry in glob_with(&pattern, options)? {
            let path = entry?;
            if path.is_file() {
                candidates.push(path);
            }
        }
    }

    log::info!(
        "Found {} candidate files in {}",
        candidates.len(),
        config.source_dir.display()
    );

    Ok(candidates)
}
