//! formgate CLI entry point
//!
//! Parses arguments, runs the command, prints any fatal error to stderr
//! and exits non-zero. All logic lives in the CLI module.

use formgate::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e.report());
        std::process::exit(1);
    }
}
