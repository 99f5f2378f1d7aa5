/*!
 * Filesystem capability interface
 *
 * Every component that touches the disk goes through [`FileSystem`] so
 * that tests can substitute an in-memory fixture. [`RealFs`] is the
 * production implementation over `std::fs`.
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::EntryKind;

/// Minimal filesystem surface needed by the traversal and output stages
pub trait FileSystem: Sync {
    /// Resolve a path to its entry kind (follows symlinks)
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// List the immediate children of a directory as full paths
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Read the full content of a file as UTF-8 text
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Write text to a file, creating or truncating it
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Filesystem implementation backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = fs::metadata(path)?;
        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else if metadata.is_file() {
            Ok(EntryKind::File)
        } else {
            Ok(EntryKind::Other)
        }
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}
