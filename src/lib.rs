/*!
 * airef - Concatenate files and render directory trees for LLM context
 *
 * This library expands a selection of files and directories under
 * `.airefignore` rules and produces either a single concatenated text
 * document with per-file headers or a markdown rendering of the
 * directory tree, both suitable as context for Large Language Models.
 */

pub mod assembler;
pub mod clipboard;
pub mod collector;
pub mod config;
pub mod error;
pub mod matcher;
pub mod render;
pub mod report;
pub mod tree;
pub mod types;
pub mod utils;
pub mod vfs;


// Re-export main components for easier access
pub use assembler::Assembler;
pub use collector::Collector;
pub use config::{Config, OutputMode};
pub use error::{AirefError, Result};
pub use matcher::IgnoreMatcher;
pub use render::{render_forest, render_tree};
pub use report::{
    FileReportInfo, LogSink, RecordingSink, ReportFormat, Reporter, ScanReport, WarningSink,
};
pub use tree::TreeBuilder;
pub use types::{DirectoryNode, EntryKind, ROOT_SENTINEL};
pub use vfs::{FileSystem, RealFs};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
