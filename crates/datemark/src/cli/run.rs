//! The batch run loop: validate, discover, stamp each file, summarize.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use datemark_core::{
    task_for, watermark_dir, Config, DateExtractor, DatemarkError, FileDiscovery, RunStats,
    WatermarkProcessor, WatermarkSpec,
};

/// Everything a run needs besides the config file.
pub struct RunOptions {
    /// Image file or directory to process
    pub input: PathBuf,

    /// Per-run watermark settings
    pub spec: WatermarkSpec,
}

/// Execute a batch run.
///
/// Fatal conditions (missing input, nothing to process) return an error
/// before any file is touched. Per-file failures are logged and counted;
/// the loop always runs to completion.
pub fn execute(options: &RunOptions, config: &Config) -> anyhow::Result<RunStats> {
    if !options.input.exists() {
        return Err(DatemarkError::InputNotFound(options.input.clone()).into());
    }
    // Canonicalize so the output directory's base name is well-defined
    // even for inputs like "."
    let input = options.input.canonicalize()?;
    let input_dir = if input.is_file() {
        input.parent().unwrap_or(Path::new("/")).to_path_buf()
    } else {
        input.clone()
    };

    let discovery = FileDiscovery::new(config.processing.clone());
    let files = discovery.discover(&input);
    if files.is_empty() {
        return Err(DatemarkError::NoFilesMatched(input_dir).into());
    }

    let output_dir = watermark_dir(&input_dir, &config.output.dir_suffix);
    std::fs::create_dir_all(&output_dir)?;

    tracing::info!("Found {} image(s) to process", files.len());
    tracing::info!(
        "Watermark: font size {}, position {}",
        options.spec.font_size,
        options.spec.anchor.name()
    );

    let processor = WatermarkProcessor::new(config, options.spec);
    let progress = create_progress_bar(files.len() as u64);
    let start = Instant::now();
    let mut stats = RunStats::default();

    for file in &files {
        let task = task_for(file, &output_dir);

        let text = match DateExtractor::extract(file) {
            Some(date) => date,
            None => {
                tracing::info!("Using current date for {:?}", task.file_name());
                DateExtractor::today_display()
            }
        };

        match processor.process(&task, &text) {
            Ok(()) => {
                stats.processed += 1;
                tracing::info!("Stamped {:?} -> {}", task.file_name(), text);
            }
            Err(e) => {
                stats.failed += 1;
                tracing::error!("Failed: {:?} - {}", file, e);
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    print_summary(&stats, start.elapsed(), &output_dir);

    Ok(stats)
}

/// Create a progress bar for the batch loop.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

/// Print a formatted summary block after the batch.
fn print_summary(stats: &RunStats, elapsed: Duration, output_dir: &Path) {
    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Processed:    {:>8}", stats.processed);
    if stats.failed > 0 {
        eprintln!("    Failed:       {:>8}", stats.failed);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", stats.total());
    eprintln!("    Duration:     {:>7.1}s", elapsed.as_secs_f64());
    eprintln!("    Output:       {}", output_dir.display());
    eprintln!("  ====================================");
}
