//! Handler for the `summary` command
//!
//! Prints the done/remaining counts for the session's initial store.

use super::common::format_summary;
use crate::cli::OutputFormatter;
use crate::core::TicketStore;
use crate::error::Result;

/// Handler for the `summary` command
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn handle_summary_command(store: &TicketStore, output: &OutputFormatter) -> Result<()> {
    let summary = store.summary();

    if output.is_json() {
        return output.print_json(&summary);
    }

    output.info(&format!("You have {} tickets", store.len()));
    output.info(&format_summary(summary.done, summary.remaining));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Status, TicketId};

    #[test]
    fn test_summary_handler_runs() {
        let mut store = TicketStore::with_seed();
        store.add("extra", None);
        store.set_status(TicketId(1), Status::Completed);

        let output = OutputFormatter::new(false, true);
        assert!(handle_summary_command(&store, &output).is_ok());

        let output = OutputFormatter::new(true, true);
        assert!(handle_summary_command(&store, &output).is_ok());
    }
}
