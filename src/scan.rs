//! Input discovery
//!
//! Finds the image files to analyze in a directory. The result is sorted so
//! that two runs over the same directory produce the same report.

use crate::error::ScanError;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions scanned when none are configured
pub const DEFAULT_EXTENSIONS: [&str; 1] = ["png"];

/// List image files in `dir` whose extension is one of `extensions`
///
/// Extension matching is case-insensitive. Subdirectories are only entered
/// when `recursive` is set. Entries that cannot be read are skipped with a
/// warning; only a missing or unreadable root is an error.
pub fn discover<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
    recursive: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    info!("🔍 Scanning folder: {}", dir.display());

    let wanted: Vec<String> = extensions
        .iter()
        .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
        .collect();

    let mut walker = WalkDir::new(dir).follow_links(true).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself failed: nothing can be enumerated
            Err(err) if err.depth() == 0 => {
                return Err(ScanError::Walk {
                    path: dir.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!("⚠️  Skipping unreadable entry: {}", err);
                continue;
            }
        };

        // Only process files (not directories)
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if has_wanted_extension(path, &wanted) {
            files.push(path.to_path_buf());
        } else {
            debug!("Ignoring {}", path.display());
        }
    }

    files.sort();
    info!("📂 Found {} image file(s)", files.len());

    Ok(files)
}

fn has_wanted_extension(path: &Path, wanted: &[String]) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            wanted.iter().any(|w| *w == ext)
        }
        None => false,
    }
}
