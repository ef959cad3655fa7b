//! Handler for the `show` command
//!
//! Renders a single ticket from the session's initial store, expanded.

use super::common::{format_ticket_details, format_ticket_row};
use crate::cli::OutputFormatter;
use crate::config::AppConfig;
use crate::core::{TicketId, TicketStore};
use crate::error::{Result, TicketTrackerError};

/// Handler for the `show` command
///
/// # Arguments
///
/// * `store` - The store to look up
/// * `id` - Numeric id of the ticket to show
/// * `config` - Application configuration (date format)
/// * `output` - Output formatter for displaying results
///
/// # Errors
///
/// Returns [`TicketTrackerError::TicketNotFound`] when no ticket with
/// the given id exists in the store.
pub fn handle_show_command(
    store: &TicketStore,
    id: u64,
    config: &AppConfig,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket = store
        .get(TicketId(id))
        .ok_or(TicketTrackerError::TicketNotFound { id })?;

    if output.is_json() {
        return output.print_json(ticket);
    }

    output.info(&format_ticket_row(ticket, &config.date_format));
    output.info(&format_ticket_details(ticket));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_existing_ticket() {
        let store = TicketStore::with_seed();
        let config = AppConfig::default();
        let output = OutputFormatter::new(false, true);

        assert!(handle_show_command(&store, 0, &config, &output).is_ok());
    }

    #[test]
    fn test_show_unknown_id_errors() {
        let store = TicketStore::with_seed();
        let config = AppConfig::default();
        let output = OutputFormatter::new(false, true);

        let err = handle_show_command(&store, 7, &config, &output).unwrap_err();
        assert!(matches!(
            err,
            TicketTrackerError::TicketNotFound { id: 7 }
        ));
    }
}
