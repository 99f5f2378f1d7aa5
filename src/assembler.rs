/*!
 * Concatenation assembly: one text blob with per-file headers
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::Result;
use crate::report::{FileReportInfo, WarningSink};
use crate::utils::header_path;
use crate::vfs::FileSystem;

/// Per-run statistics gathered while assembling
#[derive(Debug, Clone, Default)]
pub struct AssembleStats {
    /// Number of files whose content made it into the blob
    pub files_processed: usize,
    /// Number of files skipped due to read errors
    pub files_skipped: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each file, keyed by workspace-relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Builds the concatenated output document from a collected file list
pub struct Assembler<'a, F: FileSystem> {
    config: &'a Config,
    fs: &'a F,
    sink: &'a dyn WarningSink,
    progress: Arc<ProgressBar>,
}

impl<'a, F: FileSystem> Assembler<'a, F> {
    /// Create a new assembler
    pub fn new(
        config: &'a Config,
        fs: &'a F,
        sink: &'a dyn WarningSink,
        progress: Arc<ProgressBar>,
    ) -> Self {
        Self {
            config,
            fs,
            sink,
            progress,
        }
    }

    /// Concatenate the given files, in the given order, into one blob.
    ///
    /// Each file contributes a fixed-format header with its
    /// workspace-relative path followed by its full text content. Files
    /// that cannot be read as text are skipped with a warning. Given the
    /// sorted list from the collector, identical selections over an
    /// unchanged filesystem always yield byte-identical output.
    pub fn assemble(&self, files: &[PathBuf]) -> (String, AssembleStats) {
        let mut blob = String::new();
        let mut stats = AssembleStats::default();

        for file in files {
            self.progress.inc(1);

            let content = match self.fs.read_text(file) {
                Ok(content) => content,
                Err(e) => {
                    self.sink.warn(format!(
                        "Skipping file {} due to read error: {}",
                        file.display(),
                        e
                    ));
                    stats.files_skipped += 1;
                    continue;
                }
            };

            let rel_path = header_path(file, &self.config.workspace_root);

            blob.push_str(&format!("\n/* ---- File: {} ---- */\n\n", rel_path));
            blob.push_str(&content);
            blob.push_str("\n\n");

            let lines = content.lines().count();
            let chars = content.chars().count();
            stats.files_processed += 1;
            stats.total_lines += lines;
            stats.total_chars += chars;
            stats
                .file_details
                .insert(rel_path, FileReportInfo { lines, chars });
        }

        (blob, stats)
    }

    /// Assemble and write the blob to the configured output path,
    /// overwriting any existing file.
    pub fn write(&self, files: &[PathBuf]) -> Result<(String, AssembleStats)> {
        let (blob, stats) = self.assemble(files);
        self.write_blob(&self.config.output_file, &blob)?;
        Ok((blob, stats))
    }

    fn write_blob(&self, path: &Path, blob: &str) -> Result<()> {
        self.fs.write_text(path, blob)?;
        Ok(())
    }
}
