//! Command-line interface definitions
//!
//! Running without a subcommand starts the interactive session, which
//! is where the tracker actually lives: state is in-memory only, so
//! the one-shot subcommands render a freshly seeded store and exit.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A session-scoped ticket tracker for the terminal
#[derive(Parser)]
#[command(name = "ticket-tracker", version, about, long_about = None)]
pub struct Cli {
    /// Command to run; defaults to the interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start with an empty store instead of the example ticket
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Path to a config file (overrides the standard locations)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the ticket list once and exit
    List {
        /// Only show tickets with this status (created, ongoing, completed)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Render one ticket, expanded, and exit
    Show {
        /// Numeric id of the ticket
        id: u64,
    },
    /// Render the done/remaining summary once and exit
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["ticket-tracker"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["ticket-tracker", "list", "--status", "created"]);
        assert!(matches!(
            cli.command,
            Some(Commands::List { status: Some(s) }) if s == "created"
        ));

        let cli = Cli::parse_from(["ticket-tracker", "summary", "--json", "--no-seed"]);
        assert!(matches!(cli.command, Some(Commands::Summary)));
        assert!(cli.json);
        assert!(cli.no_seed);

        let cli = Cli::parse_from(["ticket-tracker", "show", "3"]);
        assert!(matches!(cli.command, Some(Commands::Show { id: 3 })));
    }
}
