/*!
 * Core types for the airef traversal and tree-building stages
 */

/// Sentinel relative path assigned to the workspace root node
pub const ROOT_SENTINEL: &str = "/";

/// Kind of a resolved filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory containing other entries
    Directory,
    /// Anything else (sockets, broken symlinks, ...) - skipped, never fatal
    Other,
}

/// One entry (file or directory) in the in-memory tree built for
/// structure rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Entry name (final path component)
    pub name: String,
    /// Workspace-relative forward-slash path; `"/"` for the root node
    pub rel_path: String,
    /// File or directory
    pub kind: EntryKind,
    /// Children, sorted lexicographically by name; empty for files
    pub children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Create a leaf node for a regular file
    pub fn file(name: String, rel_path: String) -> Self {
        Self {
            name,
            rel_path,
            kind: EntryKind::File,
            children: Vec::new(),
        }
    }

    /// Create a directory node from already-built children
    pub fn directory(name: String, rel_path: String, children: Vec<DirectoryNode>) -> Self {
        Self {
            name,
            rel_path,
            kind: EntryKind::Directory,
            children,
        }
    }

    /// Whether this node is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
