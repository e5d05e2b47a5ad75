use std::path::Path;

use crate::aggregate::AggregationMode;
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{CslocError, Result};
use crate::output::{OutputFormat, OutputSink, ScanProgress, print_error_full, print_note};
use crate::pipeline::{self, AnalysisOptions};
use crate::scanner::GlobFilter;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub options: AnalysisOptions,
    pub format: OutputFormat,
    pub exclude: Vec<String>,
}

/// Merge config and CLI. Flags win; exclude patterns accumulate.
#[must_use]
pub fn resolve_settings(config: &Config, cli: &Cli) -> ResolvedSettings {
    let per_file = cli.per_file || config.analysis.per_file;
    let mode = if per_file {
        AggregationMode::PerFile
    } else {
        AggregationMode::ByType
    };

    let mut exclude = config.scanner.exclude.clone();
    exclude.extend(cli.exclude.iter().cloned());

    ResolvedSettings {
        options: AnalysisOptions {
            mode,
            threads: cli
                .threads
                .map(usize::from)
                .or(config.analysis.threads)
                .map(|n| n.max(1)),
            follow_links: !cli.no_follow_links && config.analysis.follow_links,
        },
        format: cli.format.unwrap_or(config.output.format),
        exclude,
    }
}

/// Load the explicit config file, or discover one unless disabled.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::default());
    }
    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Run an analysis and map the outcome to an exit code.
#[must_use]
pub fn run_analyze(cli: &Cli) -> i32 {
    match run_analyze_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_ERROR
        }
    }
}

fn report_error(e: &CslocError) {
    print_error_full(
        e.error_type(),
        &e.to_string(),
        e.detail().as_deref(),
        e.suggestion(),
    );
}

/// # Errors
/// Returns an error for invalid configuration, an invalid exclude pattern,
/// an output file that cannot be created, or a worker that cannot start.
pub fn run_analyze_impl(cli: &Cli) -> Result<()> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    let settings = resolve_settings(&loaded.config, cli);
    let notes = cli.verbose > 0 && !cli.quiet;

    if notes {
        match &loaded.source {
            Some(path) => print_note(&format!("using config {}", path.display())),
            None => print_note("no config file, using defaults"),
        }
        print_note(&format!(
            "using {} worker threads",
            settings.options.worker_count()
        ));
    }

    let filter = GlobFilter::new(&settings.exclude)?;
    // Opened before the walk so an unwritable destination fails fast.
    let mut sink = OutputSink::open(cli.output.as_deref())?;

    let progress = ScanProgress::new(cli.quiet);
    let report = pipeline::run(&cli.paths, &settings.options, filter, &progress);
    progress.finish();
    let report = report?;

    let content = settings.format.formatter().format(&report)?;
    sink.write_report(&content)?;

    if notes && let Some(path) = sink.path() {
        print_note(&format!("report written to {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
