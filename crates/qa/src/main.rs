//! Command-line interface for the `qa` question answering tool.

use std::process::ExitCode;

use clap::Parser;
use qa::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::run(&cli)
}
