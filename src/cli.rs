use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use airac::config::OutputFormat;

/// AIRAC cycle calculator.
#[derive(Parser)]
#[command(name = "airac", version, about = "AIRAC cycle identifiers and effective dates")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format (short, long, json). Overrides AIRAC__OUTPUT__FORMAT.
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Date to look up (YYYY-MM-DD, UTC). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Subcommand to run. Without one, prints the cycle in effect at --date.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a YYOO identifier.
    Id {
        /// Identifier such as 1209.
        identifier: String,
    },
    /// List every cycle effective in a year.
    Year {
        /// Four-digit year.
        year: i32,
    },
}
