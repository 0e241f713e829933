mod analyze_cmd;
mod cli;
mod config;
mod convert;
mod generate;
mod input;
mod logging;
mod validate_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Validate(args) => validate_cmd::run(args),
        Command::Generate(args) => generate::run(args),
    }
}
