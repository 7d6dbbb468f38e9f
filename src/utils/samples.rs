//! Locating per-sample files

use super::filesystem::is_same_file;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Sample ID of a source file: its name without the extension
pub fn sample_id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

/// Path of a sample's file inside `dir`
///
/// An empty extension means the sample ID is the whole file name.
pub fn sample_file_path(dir: &Path, sample: &str, extension: &str) -> PathBuf {
    if extension.is_empty() {
        dir.join(sample)
    } else {
        dir.join(format!("{}.{}", sample, extension))
    }
}

/// List the sample files directly inside `dir`
///
/// Subdirectories are not descended into. Files whose extension differs
/// from `extension` are skipped unless it is empty, as is `exclude`.
/// Entries come back in filesystem order unless `sort` is set.
pub fn list_sample_files(
    dir: &Path,
    extension: &str,
    exclude: Option<&Path>,
    sort: bool,
) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if sort {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !extension.is_empty()
            && path.extension().and_then(|ext| ext.to_str()) != Some(extension)
        {
            continue;
        }

        if let Some(exclude) = exclude
            && is_same_file(path, exclude)
        {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}
