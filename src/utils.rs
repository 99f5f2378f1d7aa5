/*!
 * Utility functions for airef
 */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::matcher::IgnoreMatcher;

/// Compute the workspace-relative path as a forward-slash string.
///
/// Returns `None` when the path does not live under the root - such
/// paths have no workspace-relative form.
pub fn relative_forward_slash(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Header relative path for a file in the concatenated output.
///
/// Falls back to the full path (forward-slashed) for entries outside
/// the workspace root so the header never comes out empty.
pub fn header_path(path: &Path, root: &Path) -> String {
    match relative_forward_slash(path, root) {
        Some(rel) if !rel.is_empty() => rel,
        _ => path.to_string_lossy().replace('\\', "/"),
    }
}

/// Count the files a selection will expand to, for progress tracking.
///
/// Best-effort mirror of the collector's traversal over the real disk:
/// the same ignore rules are applied but traversal errors just stop
/// counting that subtree. The count only sizes the progress bar.
pub fn count_files(selection: &[PathBuf], matcher: &IgnoreMatcher) -> u64 {
    // Deduplicated like the collector, so overlapping selection entries
    // do not inflate the count
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for entry in selection {
        if entry.is_file() {
            if !matcher.is_ignored(entry, false) {
                seen.insert(entry.clone());
            }
        } else if entry.is_dir() {
            if matcher.is_ignored(entry, true) {
                continue;
            }
            let walker = WalkDir::new(entry).into_iter();
            for child in walker
                .filter_entry(|e| !matcher.is_ignored(e.path(), e.file_type().is_dir()))
                .filter_map(Result::ok)
            {
                if child.file_type().is_file() {
                    seen.insert(child.into_path());
                }
            }
        }
    }

    seen.len() as u64
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
