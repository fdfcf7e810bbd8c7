//! Command-line surface.

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "warning", "error"];

#[derive(Debug, Parser)]
#[command(
    name = "seedling",
    about = "Item CRUD skeleton over a pluggable repository",
    version
)]
pub struct Cli {
    /// Persist items in this SQLite file instead of process memory
    #[arg(long, global = true, env = "SEEDLING_DB")]
    pub db: Option<PathBuf>,

    /// Accept negative item values
    #[arg(long, global = true, env = "SEEDLING_ALLOW_NEGATIVE")]
    pub allow_negative: bool,

    /// Log level for the file logger
    #[arg(
        long,
        global = true,
        env = "SEEDLING_LOG_LEVEL",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LOG_LEVELS)
    )]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "SEEDLING_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Item(ItemCommand),
    /// Print the generation plan for a template answers file
    Plan {
        /// JSON answers file
        #[arg(long)]
        answers: PathBuf,
    },
}

/// Commands that run against an item store.
#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// Create an item
    Create {
        name: String,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// List stored items, one per line
    List,
    /// Show one item by id
    Get { id: String },
    /// Delete one item by id
    Delete { id: String },
}
