//! Source tree scanning.
//!
//! Walks a UI source tree, feeds each source file through the extractor, and
//! tags every hit with its file of origin. One-shot, sequential, offline.

use crate::extract::{extract_strings, ExtractedString};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File extensions treated as UI source.
const SOURCE_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Walk `base_dir` and extract Turkish phrases from every UI source file.
///
/// Entries are visited in file-name order so repeated runs over the same
/// tree produce identical output. Unreadable files are logged and skipped,
/// not fatal.
pub fn scan_source_tree(base_dir: &Path) -> Result<Vec<ExtractedString>> {
    let mut found = Vec::new();
    let mut files_scanned = 0usize;

    let walker = WalkDir::new(base_dir).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(|e| !is_ignored(e)) {
        let entry = entry.context("Failed to walk source tree")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_source_extension(path) {
            continue;
        }

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };

        let source_file = path
            .strip_prefix(base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        let matches = extract_strings(&text, &source_file);
        debug!("{}: {} candidate phrase(s)", source_file, matches.len());
        files_scanned += 1;
        found.extend(matches);
    }

    debug!(
        "Scanned {} source file(s) under {}",
        files_scanned,
        base_dir.display()
    );
    Ok(found)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn is_ignored(entry: &walkdir::DirEntry) -> bool {
    // Always allow the root directory of the scan
    if entry.depth() == 0 {
        return false;
    }

    entry
        .file_name()
        .to_str()
        .map(|s| {
            s.starts_with('.') // Hidden files/dirs
                || s == "node_modules"
                || s == "target"
                || s == "dist"
                || s == "build"
                || s == "vendor"
        })
        .unwrap_or(false)
}
