/*!
 * Tree building for structure rendering
 *
 * Unlike the flat collector, which iterates a worklist, building a
 * nested structure is inherently recursive: child nodes feed the
 * parent's sorted children list.
 */

use std::path::Path;

use rayon::prelude::*;

use crate::config::Config;
use crate::matcher::IgnoreMatcher;
use crate::report::WarningSink;
use crate::types::{DirectoryNode, EntryKind, ROOT_SENTINEL};
use crate::utils::relative_forward_slash;
use crate::vfs::FileSystem;

/// Builds an in-memory tree per selected root, applying the same ignore
/// rules as the file collector.
pub struct TreeBuilder<'a, F: FileSystem> {
    config: &'a Config,
    matcher: &'a IgnoreMatcher,
    fs: &'a F,
    sink: &'a dyn WarningSink,
}

impl<'a, F: FileSystem> TreeBuilder<'a, F> {
    /// Create a new tree builder
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

    /// Build one tree per top-level selection entry.
    ///
    /// Independent subtrees share no mutable state, so they are built in
    /// parallel; the result preserves selection order. Entries that are
    /// ignored or unreadable simply produce no tree.
    pub fn build_all(&self) -> Vec<DirectoryNode> {
        self.config
            .selection
            .par_iter()
            .filter_map(|entry| self.build(entry))
            .collect()
    }

    /// Build the tree rooted at one entry, or `None` if the entry is
    /// ignored, unreadable, or of an unsupported kind.
    ///
    /// The workspace root is a distinguished case: never filtered, and
    /// carrying the sentinel relative path `"/"`. Ignored directories
    /// are pruned without descending, which also bounds traversal cost.
    pub fn build(&self, entry: &Path) -> Option<DirectoryNode> {
        let root = &self.config.workspace_root;
        let is_root = entry == root;

        let kind = match self.fs.kind(entry) {
            Ok(kind) => kind,
            Err(e) => {
                self.sink
                    .warn(format!("Error processing {}: {}", entry.display(), e));
                return None;
            }
        };

        if !is_root && self.matcher.is_ignored(entry, kind == EntryKind::Directory) {
            return None;
        }

        let name = node_name(entry);
        let rel_path = if is_root {
            ROOT_SENTINEL.to_string()
        } else {
            match relative_forward_slash(entry, root) {
                Some(rel) if !rel.is_empty() => rel,
                _ => entry.to_string_lossy().replace('\\', "/"),
            }
        };

        match kind {
            EntryKind::File => Some(DirectoryNode::file(name, rel_path)),
            EntryKind::Directory => {
                let children = match self.fs.list_dir(entry) {
                    Ok(children) => children,
                    Err(e) => {
                        self.sink.warn(format!(
                            "Error reading directory {}: {}",
                            entry.display(),
                            e
                        ));
                        return None;
                    }
                };

                let mut nodes: Vec<DirectoryNode> = children
                    .iter()
                    .filter_map(|child| self.build(child))
                    .collect();
                nodes.sort_by(|a, b| a.name.cmp(&b.name));

                Some(DirectoryNode::directory(name, rel_path, nodes))
            }
            EntryKind::Other => {
                self.sink
                    .warn(format!("Skipping unsupported entry {}", entry.display()));
                None
            }
        }
    }
}

fn node_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
