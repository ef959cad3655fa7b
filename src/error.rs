//! Error types for ticket-tracker
//!
//! The store itself never fails: missing ids are silent no-ops and
//! invalid rating text is coerced. Errors only arise at the edges,
//! when parsing command-line arguments, reading configuration, or
//! driving the terminal prompts.

use thiserror::Error;

/// Convenience result type used throughout the crate
pub type Result<T> = std::result::Result<T, TicketTrackerError>;

/// All errors the application can surface to the user
#[derive(Debug, Error)]
pub enum TicketTrackerError {
    /// A ticket reference on the command line did not match any ticket
    #[error("Ticket not found: #{id}")]
    TicketNotFound {
        /// The id that was looked up
        id: u64,
    },

    /// A status string could not be parsed
    #[error("Invalid status: '{0}'")]
    InvalidStatus(String),

    /// Failure while driving an interactive prompt
    #[error("Prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Serialization failure in JSON output mode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TicketTrackerError {
    /// User-facing message for this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TicketNotFound { id } => {
                format!("No ticket with id #{id} exists in this session")
            },
            Self::InvalidStatus(s) => format!("'{s}' is not a valid status"),
            other => other.to_string(),
        }
    }

    /// Suggestions for resolving this error, if any
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TicketNotFound { .. } => vec![
                "Run 'ticket-tracker list' to see the tickets in a fresh session".to_string(),
                "Ticket state is in-memory only and resets between runs".to_string(),
            ],
            Self::InvalidStatus(_) => {
                vec!["Valid statuses are: created, ongoing, completed".to_string()]
            },
            Self::Config(_) => {
                vec!["Check the config file syntax, or remove it to use defaults".to_string()]
            },
            _ => vec![],
        }
    }

    /// Whether the user can recover by adjusting their input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::TicketNotFound { .. } | Self::InvalidStatus(_) | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_status_message() {
        let err = TicketTrackerError::InvalidStatus("closed".to_string());
        assert!(err.user_message().contains("closed"));
        assert!(!err.suggestions().is_empty());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_ticket_not_found_suggestions() {
        let err = TicketTrackerError::TicketNotFound { id: 7 };
        assert!(err.user_message().contains("#7"));
        assert_eq!(err.suggestions().len(), 2);
    }

    #[test]
    fn test_dialog_error_is_not_recoverable() {
        let err = TicketTrackerError::Dialog(dialoguer::Error::IO(std::io::Error::other("boom")));
        assert!(!err.is_recoverable());
        assert!(err.suggestions().is_empty());
    }
}
