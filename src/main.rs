//! make_text CLI entrypoint.
//!
//! Parse args, run the conversion, and exit with a nonzero status on any
//! failure. For programmatic use, prefer the library API (`make_text::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
