use crate::camsort_core::error::Result;
use crate::camsort_core::metadata::extract_metadata;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Filename prefix produced by normalization, e.g. "2023-06-01 10.00.00".
const NORMALIZED_NAME_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]-[month]-[day] [hour].[minute].[second]");

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

/// The leading `YYYY-MM-DD` token of a filename, if present.
pub fn date_token(name: &str) -> Option<&str> {
    DATE_PREFIX.find(name).map(|m| m.as_str())
}

/// Rename candidates whose name does not yet start with a date token to
/// `YYYY-MM-DD HH.mm.ss.<ext>` derived from their capture timestamp.
///
/// Returns the candidate list with renamed paths substituted in, so the
/// following strategy pass sees the new names. Files without an extractable
/// timestamp, and files that fail per-file, keep their original name.
pub fn normalize_names(candidates: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    println!("Normalizing file names...");

    let mut out = Vec::with_capacity(candidates.len());
    for path in candidates {
        match normalize_one(&path) {
            Ok(Some(new_path)) => out.push(new_path),
            Ok(None) => out.push(path),
            Err(e) => {
                log::warn!("Could not normalize {}: {}", path.display(), e);
                out.push(path);
            }
        }
    }

    Ok(out)
}

/// Rename a single file to its normalized name. Returns the new path, or
/// `None` when the name is left alone (already normalized, no usable
/// metadata, or a non-UTF-8 name).
fn normalize_one(path: &Path) -> Result<Option<PathBuf>> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        log::warn!("Skipping non-UTF-8 file name: {}", path.display());
        return Ok(None);
    };

    // Idempotence: an already-normalized name is never touched.
    if date_token(name).is_some() {
        log::debug!("{} already carries a date prefix", name);
        return Ok(None);
    }

    let captured_at = extract_metadata(path)?.and_then(|m| m.captured_at);
    let Some(captured_at) = captured_at else {
        log::warn!("No capture timestamp for {}, leaving name unchanged", path.display());
        return Ok(None);
    };

    let stem = captured_at.format(NORMALIZED_NAME_FORMAT)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let new_name = next_free_name(&stem, &ext, |candidate| parent.join(candidate).exists());
    let target = parent.join(&new_name);

    println!("Renaming {} to {}", path.display(), new_name);
    fs::rename(path, &target)?;

    Ok(Some(target))
}

/// First free filename for `stem` + `ext`, appending " (1)", " (2)", ... to
/// the stem until `exists` reports a miss. Existence checks are sequential;
/// exclusive access to the directory is assumed.
pub fn next_free_name(stem: &str, ext: &str, exists: impl Fn(&str) -> bool) -> String {
    let join = |stem: &str| {
        if ext.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{ext}")
        }
    };

    let name = join(stem);
    if !exists(&name) {
        return name;
    }

    let mut n = 1u32;
    loop {
        let name = join(&format!("{stem} ({n})"));
        if !exists(&name) {
            return name;
        }
        n += 1;
    }
}
