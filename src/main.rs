use clap::Parser;

use csloc::cli::Cli;
use csloc::commands::run_analyze;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_analyze(&cli));
}
