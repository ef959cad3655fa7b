use super::{Rating, Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Mostly useful in tests and for constructing tickets with a fixed
/// timestamp or pre-set status without going through a store.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    text: Option<String>,
    date: Option<DateTime<Utc>>,
    status: Option<Status>,
    rating: Option<Rating>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the creation timestamp
    #[must_use]
    pub const fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the rating
    #[must_use]
    pub const fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Build the ticket
    #[must_use]
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            text: self.text,
            date: self.date.unwrap_or_else(Utc::now),
            status: self.status.unwrap_or_default(),
            rating: self.rating,
        }
    }
}
