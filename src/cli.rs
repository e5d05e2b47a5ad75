use std::path::PathBuf;

use clap::Parser;

use crate::language::recognized_extensions;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "csloc")]
#[command(author, version, about = "Count blank, comment and code lines in C-family source trees")]
#[command(long_about = "Count physical lines in C, C++ and Objective-C++ sources.\n\n\
    Directories are walked recursively and files are analyzed in parallel.\n\n\
    Exit codes:\n  \
    0 - Analysis completed\n  \
    1 - Fatal error (bad configuration, unwritable output file)")]
#[command(after_long_help = format!("Recognized files:\n{}", recognized_extensions()))]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files or directories to analyze
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Report per file instead of per language
    #[arg(short = 'f', long)]
    pub per_file: bool,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: Option<u16>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(short = 'x', long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Do not follow symbolic links
    #[arg(long)]
    pub no_follow_links: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Suppress the progress spinner and notes
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print notes about configuration and threads (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
