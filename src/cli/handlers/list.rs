//! Handler for the `list` command
//!
//! Renders the session's initial ticket list once and exits. With no
//! persistence behind the store this is a view of the seeded state,
//! mainly useful for scripting and for checking the output format.

use super::common::{format_summary, format_ticket_row};
use crate::cli::OutputFormatter;
use crate::config::AppConfig;
use crate::core::{Status, TicketStore};
use crate::error::Result;

/// Handler for the `list` command
///
/// # Arguments
///
/// * `store` - The store to render
/// * `status` - Optional status filter string
/// * `config` - Application configuration (date format)
/// * `output` - Output formatter for displaying results
///
/// # Errors
///
/// Returns an error if the status filter string is not a valid status.
pub fn handle_list_command(
    store: &TicketStore,
    status: Option<&str>,
    config: &AppConfig,
    output: &OutputFormatter,
) -> Result<()> {
    let filter: Option<Status> = status.map(str::parse).transpose()?;

    let tickets: Vec<_> = store
        .tickets()
        .iter()
        .filter(|t| filter.is_none_or(|f| t.status == f))
        .collect();

    if output.is_json() {
        return output.print_json(&tickets);
    }

    let summary = store.summary();
    output.info(&format!("Ticket List ({} tickets)", store.len()));
    output.info(&format_summary(summary.done, summary.remaining));
    output.info("");

    if tickets.is_empty() {
        output.info("No tickets to show");
        return Ok(());
    }

    for ticket in tickets {
        output.info(&format_ticket_row(ticket, &config.date_format));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_rejects_bad_status_filter() {
        let store = TicketStore::with_seed();
        let config = AppConfig::default();
        let output = OutputFormatter::new(false, true);

        let result = handle_list_command(&store, Some("closed"), &config, &output);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_accepts_valid_filter() {
        let store = TicketStore::with_seed();
        let config = AppConfig::default();
        let output = OutputFormatter::new(false, true);

        let result = handle_list_command(&store, Some("completed"), &config, &output);
        assert!(result.is_ok());
    }
}
