/*!
 * Ignore-rule loading and path filtering
 *
 * Patterns come from an optional `.airefignore` file at the workspace
 * root (full `.gitignore` syntax: comments, `!` negation, trailing-slash
 * directory-only patterns) plus any extra patterns supplied on the
 * command line. A missing or unreadable pattern file yields an empty
 * matcher - it is never an error.
 */

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::report::WarningSink;
use crate::utils::relative_forward_slash;

/// Fixed name of the ignore-pattern file at the workspace root
pub const IGNORE_FILE_NAME: &str = ".airefignore";

/// Compiled predicate over workspace-relative paths
pub struct IgnoreMatcher {
    /// Workspace root all relative paths are computed against
    root: PathBuf,
    /// Compiled gitignore-style pattern set
    gitignore: Gitignore,
}

impl IgnoreMatcher {
    /// Load `.airefignore` from the workspace root and compile it
    /// together with any extra command-line patterns.
    ///
    /// Fails open: every load or compile problem degrades to an empty
    /// matcher and a warning, so an unparsable ignore file can never
    /// abort an operation.
    pub fn load(root: &Path, extra_patterns: &[String], sink: &dyn WarningSink) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        let ignore_file = root.join(IGNORE_FILE_NAME);
        if ignore_file.is_file() {
            if let Some(err) = builder.add(&ignore_file) {
                sink.warn(format!(
                    "Failed to read {}: {}",
                    ignore_file.display(),
                    err
                ));
            }
        }

        for pattern in extra_patterns {
            if let Err(err) = builder.add_line(None, pattern) {
                sink.warn(format!("Invalid ignore pattern '{}': {}", pattern, err));
            }
        }

        let gitignore = match builder.build() {
            Ok(gitignore) => gitignore,
            Err(err) => {
                sink.warn(format!("Failed to compile ignore patterns: {}", err));
                Gitignore::empty()
            }
        };

        Self {
            root: root.to_path_buf(),
            gitignore,
        }
    }

    /// Matcher that matches nothing
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            gitignore: Gitignore::empty(),
        }
    }

    /// Workspace root this matcher was compiled against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Decide whether a path is excluded by the ignore rules.
    ///
    /// The workspace root itself is never ignorable, so an overly broad
    /// pattern set cannot empty out the whole selection. Paths outside
    /// the root have no workspace-relative form and are not ignorable
    /// either. `is_dir` is needed to honor directory-only patterns.
    pub fn is_ignored(&self, abs_path: &Path, is_dir: bool) -> bool {
        if abs_path == self.root {
            return false;
        }

        let rel = match relative_forward_slash(abs_path, &self.root) {
            Some(rel) if !rel.is_empty() => rel,
            _ => return false,
        };

        self.gitignore.matched(&rel, is_dir).is_ignore()
    }
}
