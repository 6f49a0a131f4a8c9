//! CLI command implementations
//!
//! Every command resolves its config first, then the rule set, then does
//! its work against stdin/stdout. Commands take their reader and writer as
//! arguments; `run_command` binds them to the process streams.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::json;

use crate::api::AppHandler;
use crate::countries::CountryList;
use crate::navigation::History;
use crate::schema::{Record, SchemaLoader, Validator};
use crate::store::MemoryResultStore;

use super::args::Command;
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_lines, read_request, write_error, write_json, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Command::Validate { config } => validate(config.as_deref(), &mut stdin.lock(), &mut out),
        Command::Session { config } => session(config.as_deref(), stdin.lock(), &mut out),
        Command::Schema { config } => schema(config.as_deref(), &mut out),
        Command::Countries { query } => countries(&query, &mut out),
    }
}

/// Validate one JSON record
///
/// A malformed record is answered with an error envelope; a record that
/// breaks rules is a normal `{"valid":false,...}` answer.
pub fn validate<R: BufRead, W: Write>(
    config_path: Option<&Path>,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let schema = config.load_schema()?;

    let value = read_request(input)?;
    let record = match Record::from_json(&value) {
        Ok(r) => r,
        Err(e) => return write_error(out, e.code(), &e.to_string()),
    };

    let result = Validator::new(&schema).validate(&record);
    write_response(out, result.to_json())
}

/// Interactive driver: one request per line, one response per line.
///
/// Starts on the landing page with the store holding its placeholder.
/// Ends at end of input.
pub fn session<R: BufRead, W: Write>(
    config_path: Option<&Path>,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let schema = config.load_schema()?;

    let mut handler = AppHandler::new(&schema, MemoryResultStore::new(&schema), History::new());

    for line in read_lines(input) {
        match line {
            Ok(request) => {
                let response = handler.handle(&request);
                write_json(out, &response.to_json())?;
            }
            Err(e) => {
                // I/O error reading - this is fatal
                write_error(out, e.code(), &e.to_string())?;
                break;
            }
        }
    }

    Ok(())
}

/// Print the active rule set
pub fn schema<W: Write>(config_path: Option<&Path>, out: &mut W) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let schema = config.load_schema()?;

    write_json(out, &SchemaLoader::to_json(&schema)?)
}

/// Print country suggestions
pub fn countries<W: Write>(query: &str, out: &mut W) -> CliResult<()> {
    let list = CountryList::default();
    write_response(out, json!({ "suggestions": list.suggest(query) }))
}
