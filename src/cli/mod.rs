//! CLI module for formgate
//!
//! Provides command-line interface for:
//! - validate: Validate one record read from stdin
//! - session: Drive forms with JSON-lines requests
//! - schema: Print the active rule set
//! - countries: Country suggestions

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{countries, run, run_command, schema, session, validate};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{read_lines, read_request, write_error, write_json, write_response};
