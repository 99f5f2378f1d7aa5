/*!
 * Configuration handling for airef
 */

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::error::Result;
use crate::{bail, ensure};

/// Which artifact to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Single concatenated text document with per-file headers
    Concat,
    /// Markdown rendering of the directory tree
    Structure,
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::Concat
    }
}

/// Command-line arguments for airef
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "airef",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate files and render directory trees for LLM context",
    long_about = "Expands a selection of files and directories under .airefignore rules and \
                  produces either a single concatenated text document with per-file headers \
                  or a markdown directory tree, for use as LLM context."
)]
pub struct Args {
    /// Files and directories to process
    pub paths: Vec<String>,

    /// Workspace root all relative paths and ignore rules are computed against
    #[clap(long, default_value = ".")]
    pub workspace_root: String,

    /// Output file name (relative names resolve against the workspace root)
    #[clap(short, long)]
    pub output: Option<String>,

    /// Artifact to produce
    #[clap(long, value_enum, default_value_t = OutputMode::Concat)]
    pub mode: OutputMode,

    /// Comma-separated list of extra ignore patterns (gitignore syntax)
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Number of threads to use for processing
    #[clap(long, default_value = "4")]
    pub threads: usize,

    /// Copy output to system clipboard
    #[clap(long)]
    pub clip: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Default output file name in concatenation mode
pub const DEFAULT_CONCAT_OUTPUT: &str = "concatenated.txt";
/// Default output file name in structure mode
pub const DEFAULT_STRUCTURE_OUTPUT: &str = "structure.md";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Caller-supplied selection of files and directories
    pub selection: Vec<PathBuf>,

    /// Workspace root directory
    pub workspace_root: PathBuf,

    /// Output file path; overwritten unconditionally
    pub output_file: PathBuf,

    /// Artifact to produce
    pub mode: OutputMode,

    /// Extra ignore patterns merged into the `.airefignore` matcher
    pub ignore_patterns: Vec<String>,

    /// Number of threads to use for processing
    pub num_threads: usize,

    /// Copy output to clipboard
    pub clip: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let workspace_root = PathBuf::from(args.workspace_root);

        let output_name = args.output.unwrap_or_else(|| {
            match args.mode {
                OutputMode::Concat => DEFAULT_CONCAT_OUTPUT,
                OutputMode::Structure => DEFAULT_STRUCTURE_OUTPUT,
            }
            .to_string()
        });
        let output_file = resolve_output(&output_name, &workspace_root);

        Self {
            selection: args.paths.into_iter().map(PathBuf::from).collect(),
            workspace_root,
            output_file,
            mode: args.mode,
            ignore_patterns: args.ignore_patterns,
            num_threads: args.threads,
            clip: args.clip,
        }
    }

    /// Validate the configuration.
    ///
    /// Only the operation-aborting conditions are checked here; unreadable
    /// selection entries surface later as per-entry warnings.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.workspace_root.is_dir(),
            WorkspaceNotFound,
            "{}",
            self.workspace_root.display()
        );

        if self.selection.is_empty() {
            return Err(crate::error::AirefError::EmptySelection);
        }

        for entry in &self.selection {
            if entry.as_os_str().is_empty() {
                bail!(InvalidSelection, "empty path in selection");
            }
        }

        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.exists(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}

// Relative output names land next to the workspace root, mirroring how
// the selection's relative paths are interpreted.
fn resolve_output(name: &str, workspace_root: &Path) -> PathBuf {
    let path = PathBuf::from(name);
    if path.is_absolute() {
        path
    } else {
        workspace_root.join(path)
    }
}
