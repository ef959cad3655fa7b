//! Output formatting for CLI commands
//!
//! Wraps the difference between human-readable colored output and
//! machine-readable JSON so handlers don't have to care which mode the
//! user asked for.

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// Formats command output as colored text or JSON
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter
    ///
    /// When `no_color` is set, color codes are suppressed globally for
    /// the process.
    #[must_use]
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json, no_color }
    }

    /// Whether JSON output mode is active
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Whether color output is suppressed
    #[must_use]
    pub const fn is_no_color(&self) -> bool {
        self.no_color
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{}", message.green());
        }
    }

    /// Print a warning line
    pub fn warning(&self, message: &str) {
        if !self.json {
            println!("{}", message.yellow());
        }
    }

    /// Print an error line to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{}", format!("Error: {message}").red());
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_flag() {
        let formatter = OutputFormatter::new(true, false);
        assert!(formatter.is_json());

        let formatter = OutputFormatter::new(false, true);
        assert!(!formatter.is_json());
        assert!(formatter.is_no_color());
    }

    #[test]
    fn test_text_messages_suppressed_in_json_mode() {
        // info/success/warning go to stdout only in text mode; these
        // must all be no-ops (and not panic) when JSON mode is active
        let formatter = OutputFormatter::new(true, true);
        formatter.info("added");
        formatter.success("Added ticket #1");
        formatter.warning("Deleted ticket #1");
    }

    #[test]
    fn test_print_json_serializes() {
        let formatter = OutputFormatter::new(true, true);
        let value = serde_json::json!({"done": 1, "remaining": 2});
        assert!(formatter.print_json(&value).is_ok());
    }
}
