/*!
 * Command-line interface for airef
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;

use airef::assembler::Assembler;
use airef::clipboard;
use airef::collector::Collector;
use airef::config::{Args, Config, OutputMode};
use airef::error::Result;
use airef::matcher::IgnoreMatcher;
use airef::render::render_forest;
use airef::report::{LogSink, ReportFormat, Reporter, ScanReport, WarningSink};
use airef::tree::TreeBuilder;
use airef::utils::count_files;
use airef::vfs::{FileSystem, RealFs};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "airef", &mut io::stdout());
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Create and validate configuration
    let mut config = Config::from_args(args);
    config.validate()?;

    // Resolve the workspace root and selection once; the engine itself
    // never canonicalizes, so duplicate detection is by these paths.
    config.workspace_root = config
        .workspace_root
        .canonicalize()
        .map_err(|e| airef::error!(WorkspaceNotFound, "{}: {}", config.workspace_root.display(), e))?;
    for entry in &mut config.selection {
        // Entries that fail to resolve stay as-is and surface later as
        // per-entry warnings.
        if let Ok(canonical) = entry.canonicalize() {
            *entry = canonical;
        }
    }

    // Configure thread pool
    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        log::warn!("Failed to set thread pool size: {}", e);
    }

    let fs = RealFs;
    let sink = LogSink::default();
    let matcher = IgnoreMatcher::load(&config.workspace_root, &config.ignore_patterns, &sink);

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📄 Processing");

    let start_time = Instant::now();

    let (blob, report) = match config.mode {
        OutputMode::Concat => run_concat(&config, &matcher, &fs, &sink, &progress)?,
        OutputMode::Structure => run_structure(&config, &matcher, &fs, &sink)?,
    };

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    if config.clip {
        clipboard::copy_to_clipboard(&blob)?;
        println!("Output copied to clipboard");
    }

    let report = ScanReport {
        duration,
        warnings: sink.count(),
        ..report
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable, config.mode);
    reporter.print_report(&report);

    Ok(())
}

fn run_concat<F: FileSystem>(
    config: &Config,
    matcher: &IgnoreMatcher,
    fs: &F,
    sink: &dyn WarningSink,
    progress: &ProgressBar,
) -> Result<(String, ScanReport)> {
    progress.set_message(format!(
        "Scanning selection under {}",
        config.workspace_root.display()
    ));
    progress.set_length(count_files(&config.selection, matcher));

    let collector = Collector::new(config, matcher, fs, sink);
    let files = collector.collect();

    let assembler = Assembler::new(config, fs, sink, Arc::new(progress.clone()));
    let (blob, stats) = assembler.write(&files)?;

    let report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: Default::default(),
        files_processed: stats.files_processed,
        files_skipped: stats.files_skipped,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        output_bytes: blob.len() as u64,
        warnings: 0,
        file_details: stats.file_details,
    };

    Ok((blob, report))
}

fn run_structure<F: FileSystem>(
    config: &Config,
    matcher: &IgnoreMatcher,
    fs: &F,
    sink: &dyn WarningSink,
) -> Result<(String, ScanReport)> {
    let builder = TreeBuilder::new(config, matcher, fs, sink);
    let trees = builder.build_all();
    let blob = render_forest(&trees);

    fs.write_text(&config.output_file, &blob)?;

    let report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: Default::default(),
        files_processed: trees.iter().map(count_file_nodes).sum(),
        files_skipped: 0,
        total_lines: 0,
        total_chars: 0,
        output_bytes: blob.len() as u64,
        warnings: 0,
        file_details: Default::default(),
    };

    Ok((blob, report))
}

fn count_file_nodes(node: &airef::types::DirectoryNode) -> usize {
    if node.is_dir() {
        node.children.iter().map(count_file_nodes).sum()
    } else {
        1
    }
}
