/*!
 * File collection: expand the selection into a flat list of files
 */

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use crate::config::Config;
use crate::matcher::IgnoreMatcher;
use crate::report::WarningSink;
use crate::types::EntryKind;
use crate::vfs::FileSystem;

/// Expands the caller's selection into a sorted, de-duplicated list of
/// absolute file paths, honoring the ignore matcher.
pub struct Collector<'a, F: FileSystem> {
    config: &'a Config,
    matcher: &'a IgnoreMatcher,
    fs: &'a F,
    sink: &'a dyn WarningSink,
}

impl<'a, F: FileSystem> Collector<'a, F> {
    /// Create a new collector
    pub fn new(
        config: &'a Config,
        matcher: &'a IgnoreMatcher,
        fs: &'a F,
        sink: &'a dyn WarningSink,
    ) -> Self {
        Self {
            config,
            matcher,
            fs,
            sink,
        }
    }

    /// Collect all files reachable from the selection.
    ///
    /// Worklist traversal: directories are expanded one level at a time
    /// and each child gets its own ignore check when popped, so ignored
    /// subtrees are pruned without descending. Errors on individual
    /// entries are warnings, never fatal. The result is de-duplicated by
    /// absolute path (case-sensitive) and sorted, so output order does
    /// not depend on selection order or traversal order.
    pub fn collect(&self) -> Vec<PathBuf> {
        let mut worklist: VecDeque<PathBuf> = self.config.selection.iter().cloned().collect();
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut files: Vec<PathBuf> = Vec::new();

        while let Some(entry) = worklist.pop_front() {
            let kind = match self.fs.kind(&entry) {
                Ok(kind) => kind,
                Err(e) => {
                    self.sink
                        .warn(format!("Error processing {}: {}", entry.display(), e));
                    continue;
                }
            };

            if self
                .matcher
                .is_ignored(&entry, kind == EntryKind::Directory)
            {
                continue;
            }

            match kind {
                EntryKind::File => {
                    if seen.insert(entry.clone()) {
                        files.push(entry);
                    }
                }
                EntryKind::Directory => match self.fs.list_dir(&entry) {
                    Ok(children) => worklist.extend(children),
                    Err(e) => {
                        self.sink
                            .warn(format!("Error reading directory {}: {}", entry.display(), e));
                    }
                },
                EntryKind::Other => {
                    self.sink.warn(format!(
                        "Skipping unsupported entry {}",
                        entry.display()
                    ));
                }
            }
        }

        files.sort();
        files
    }
}
