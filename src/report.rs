/*!
 * Warning side-channel and run reporting
 *
 * Per-entry failures never abort an operation; they are surfaced
 * through an injectable [`WarningSink`] so components stay testable
 * without ambient global state. After a run, [`Reporter`] renders a
 * summary of what was produced using the tabled library.
 */

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::config::OutputMode;

/// Side-channel for non-fatal diagnostics emitted during traversal
pub trait WarningSink: Send + Sync {
    /// Record one warning message
    fn warn(&self, message: String);

    /// Number of warnings recorded so far
    fn count(&self) -> usize;
}

/// Default sink forwarding warnings to the `log` facade
#[derive(Debug, Default)]
pub struct LogSink {
    emitted: Mutex<usize>,
}

impl WarningSink for LogSink {
    fn warn(&self, message: String) {
        log::warn!("{}", message);
        *self.emitted.lock().unwrap() += 1;
    }

    fn count(&self) -> usize {
        *self.emitted.lock().unwrap()
    }
}

/// Sink that keeps every message, for inspection in tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Snapshot of the recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }

    fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

/// Information about one concatenated file in the report
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Statistics for one completed operation
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken for the whole operation
    pub duration: Duration,
    /// Number of files written into the output
    pub files_processed: usize,
    /// Number of files skipped due to per-entry errors
    pub files_skipped: usize,
    /// Total number of lines across all files
    pub total_lines: usize,
    /// Total number of characters across all files
    pub total_chars: usize,
    /// Size of the written output in bytes
    pub output_bytes: u64,
    /// Number of warnings recorded during the run
    pub warnings: usize,
    /// Details for each file, keyed by workspace-relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for operation results
pub struct Reporter {
    format: ReportFormat,
    mode: OutputMode,
}

impl Reporter {
    /// Create a new reporter for the given pipeline
    pub fn new(format: ReportFormat, mode: OutputMode) -> Self {
        Self { format, mode }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on operation statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Truncate a workspace-relative path, keeping the trailing segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let mut segments = Vec::new();
        let mut current_len = 3; // Start with "..."
        for part in path.split('/').rev() {
            let part_len = part.len() + 1; // +1 for '/'
            if current_len + part_len > max_len {
                break;
            }
            segments.push(part);
            current_len += part_len;
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Processed".to_string(),
                value: self.format_number(report.files_processed),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "💾 Output Size".to_string(),
                value: crate::utils::format_file_size(report.output_bytes),
            },
            SummaryRow {
                key: "📦 LLM Tokens".to_string(),
                value: format!(
                    "{} tokens (estimated)",
                    self.format_number(report.total_chars / 4)
                ),
            },
        ];

        if report.files_skipped > 0 {
            rows.push(SummaryRow {
                key: "⏭️ Files Skipped".to_string(),
                value: self.format_number(report.files_skipped),
            });
        }

        if report.warnings > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Warnings".to_string(),
                value: self.format_number(report.warnings),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a files table using the tabled crate
    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        // Sort files by character count
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                tokens: self.format_number(info.chars / 4),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary_table = self.create_summary_table(report);

        let summary_title = match self.mode {
            OutputMode::Concat => "✅  CONCATENATION COMPLETE",
            OutputMode::Structure => "✅  STRUCTURE COMPLETE",
        };

        if report.file_details.is_empty() {
            return format!("{}\n{}", summary_title, summary_table);
        }

        let files_table = self.create_files_table(report);
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT"
        } else {
            "📋  PROCESSED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
