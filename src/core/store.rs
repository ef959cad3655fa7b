//! In-memory ticket store
//!
//! The store owns the ordered collection of tickets for one session and
//! exposes the mutations the presentation layer issues against it. All
//! operations are total: a missing id makes the mutation a silent no-op
//! rather than an error, and invalid rating text is coerced rather than
//! rejected. State lives for the lifetime of the store and is discarded
//! with it — there is no persistence layer behind this.

use serde::Serialize;
use tracing::debug;

use super::{Rating, Status, Ticket, TicketId};

/// Derived done/remaining counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Tickets whose status is `completed`
    pub done: usize,
    /// Everything else
    pub remaining: usize,
}

/// Ordered in-memory collection of tickets
///
/// Newest tickets sit at the front. Ids are assigned at insertion as
/// the pre-insert collection length, matching the numbering users see
/// on the ticket badges.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the single example ticket shown on first launch
    #[must_use]
    pub fn with_seed() -> Self {
        let seed = Ticket::new(
            TicketId(0),
            "Untitled ticket",
            Some("This is the description of the ticket.\nThe issue is very serious!".to_string()),
        );
        Self {
            tickets: vec![seed],
        }
    }

    /// Adds a new ticket to the front of the collection
    ///
    /// The id is the current ticket count, the timestamp is taken from
    /// the clock, and the status starts at `created`. Empty titles and
    /// descriptions are accepted as-is.
    pub fn add(&mut self, title: impl Into<String>, text: Option<String>) -> &Ticket {
        let id = TicketId(self.tickets.len() as u64);
        let ticket = Ticket::new(id, title, text);
        debug!(id = %ticket.id, title = %ticket.title, "adding ticket");
        self.tickets.insert(0, ticket);
        &self.tickets[0]
    }

    /// Removes the ticket with the given id
    ///
    /// Silently does nothing when no ticket matches, so removing the
    /// same id twice is idempotent.
    pub fn remove(&mut self, id: TicketId) {
        debug!(%id, "removing ticket");
        self.tickets.retain(|t| t.id != id);
    }

    /// Sets the status of the ticket with the given id
    ///
    /// Any status can be set from any other; there is no transition
    /// table guarding this. Missing ids are a silent no-op.
    pub fn set_status(&mut self, id: TicketId, status: Status) {
        debug!(%id, %status, "setting status");
        if let Some(ticket) = self.get_mut(id) {
            ticket.status = status;
        }
    }

    /// Parses rating text and stores it on the ticket with the given id
    ///
    /// The text is coerced via [`Rating::parse`]: non-numeric input is
    /// stored as `NaN` and out-of-range values are stored unclamped.
    /// Missing ids are a silent no-op.
    pub fn set_rating(&mut self, id: TicketId, text: &str) {
        debug!(%id, text, "setting rating");
        if let Some(ticket) = self.get_mut(id) {
            ticket.rating = Some(Rating::parse(text));
        }
    }

    /// Replaces title and description of an existing ticket
    ///
    /// Id, timestamp, status, and rating are preserved. Missing ids
    /// are a silent no-op.
    pub fn edit(&mut self, id: TicketId, title: impl Into<String>, text: Option<String>) {
        debug!(%id, "editing ticket");
        if let Some(ticket) = self.get_mut(id) {
            ticket.title = title.into();
            ticket.text = text;
        }
    }

    /// Derived done/remaining counts over the whole collection
    #[must_use]
    pub fn summary(&self) -> Summary {
        let done = self.tickets.iter().filter(|t| t.status.is_done()).count();
        Summary {
            done,
            remaining: self.tickets.len() - done,
        }
    }

    /// Looks up a ticket by id
    #[must_use]
    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| t.id == id)
    }

    /// All tickets, front to back (newest first)
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Number of tickets in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns true when the store holds no tickets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
