//! Rendering helpers shared by the list handler and the interactive session

use colored::{ColoredString, Colorize};

use crate::core::{Status, Ticket};

/// Colored status badge, fixed-width so rows line up
#[must_use]
pub fn status_badge(status: Status) -> ColoredString {
    match status {
        Status::Created => format!("{:<9}", "created").red(),
        Status::Ongoing => format!("{:<9}", "ongoing").yellow(),
        Status::Completed => format!("{:<9}", "completed").green(),
    }
}

/// One collapsed list row: id badge, timestamp, title, star strip
///
/// Completed tickets show their star strip the way the list screen
/// does; everything else leaves the column empty.
#[must_use]
pub fn format_ticket_row(ticket: &Ticket, date_format: &str) -> String {
    let stars = match (ticket.status, ticket.rating) {
        (Status::Completed, Some(rating)) => format!("  {rating}"),
        (Status::Completed, None) => "  ☆☆☆☆☆".to_string(),
        _ => String::new(),
    };

    format!(
        "#{:<3} {} [{}] {}{}",
        ticket.id,
        ticket.date.format(date_format),
        status_badge(ticket.status),
        ticket.display_title(),
        stars,
    )
}

/// Expanded detail block shown under a row: the description text
#[must_use]
pub fn format_ticket_details(ticket: &Ticket) -> String {
    match ticket.text.as_deref() {
        Some(text) if !text.is_empty() => text
            .lines()
            .map(|line| format!("      {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "      (no description)".to_string(),
    }
}

/// Summary line: "N issues resolved / M issues remaining"
#[must_use]
pub fn format_summary(done: usize, remaining: usize) -> String {
    format!(
        "{} issues resolved   {} issues remaining",
        done.to_string().green(),
        remaining.to_string().red(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rating, TicketBuilder, TicketId};

    #[test]
    fn test_row_shows_stars_only_when_completed() {
        let ticket = TicketBuilder::new()
            .id(TicketId(2))
            .title("Fix login")
            .status(Status::Completed)
            .rating(Rating(4.0))
            .build();
        let row = format_ticket_row(&ticket, "%Y-%m-%d");
        assert!(row.contains("★★★★☆"));
        assert!(row.contains("#2"));

        let ticket = TicketBuilder::new().title("Fix login").build();
        let row = format_ticket_row(&ticket, "%Y-%m-%d");
        assert!(!row.contains('★'));
    }

    #[test]
    fn test_row_unrated_completed_shows_empty_strip() {
        let ticket = TicketBuilder::new().status(Status::Completed).build();
        let row = format_ticket_row(&ticket, "%Y-%m-%d");
        assert!(row.contains("☆☆☆☆☆"));
    }

    #[test]
    fn test_details_fall_back_when_empty() {
        let ticket = TicketBuilder::new().title("t").build();
        assert!(format_ticket_details(&ticket).contains("no description"));

        let ticket = TicketBuilder::new().title("t").text("line one\nline two").build();
        let details = format_ticket_details(&ticket);
        assert!(details.contains("line one"));
        assert!(details.contains("line two"));
    }
}
