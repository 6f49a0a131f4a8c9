//! CLI argument definitions using clap
//!
//! Commands:
//! - formgate validate [--config <path>]
//! - formgate session [--config <path>]
//! - formgate schema [--config <path>]
//! - formgate countries [query]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formgate - shared field rules and submission gating for sign-up forms
#[derive(Parser, Debug)]
#[command(name = "formgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON record read from stdin
    Validate {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Drive forms with JSON requests, one per stdin line
    Session {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the active rule set as JSON
    Schema {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List country suggestions
    Countries {
        /// Case-insensitive substring to filter by
        #[arg(default_value = "")]
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
