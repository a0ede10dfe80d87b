use std::process::ExitCode;

use clap::Parser;
use log::debug;
use roster_core::error::Result;

use roster_cli::cli_args::Args;
use roster_cli::repl;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Starting with {args:?}");
    repl::run(&args)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
