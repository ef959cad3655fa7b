//! ticket-tracker - session-scoped ticket tracking in the terminal
//!
//! This is the main entry point. It parses command-line arguments,
//! loads configuration, builds the in-memory store for this session,
//! and dispatches either to a one-shot command or to the interactive
//! session loop.

use clap::Parser;
use std::process;

use ticket_tracker::cli::{
    Cli, Commands, OutputFormatter,
    handlers::{handle_list_command, handle_show_command, handle_summary_command},
};
use ticket_tracker::config::AppConfig;
use ticket_tracker::core::TicketStore;
use ticket_tracker::error::Result;
use ticket_tracker::interactive::Session;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.no_seed {
        config.seed_example = false;
    }
    if cli.no_color || config.no_color {
        colored::control::set_override(false);
    }

    // The store lives exactly as long as this invocation
    let store = if config.seed_example {
        TicketStore::with_seed()
    } else {
        TicketStore::new()
    };

    match cli.command {
        Some(Commands::List { status }) => {
            handle_list_command(&store, status.as_deref(), &config, formatter)
        },
        Some(Commands::Show { id }) => handle_show_command(&store, id, &config, formatter),
        Some(Commands::Summary) => handle_summary_command(&store, formatter),
        None => Session::new(store, config, formatter).run(),
    }
}

/// Render an error with its suggestions and, in JSON mode, as JSON
fn handle_error(error: &ticket_tracker::error::TicketTrackerError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }
}
