//! Ticket entity and its value types
//!
//! A ticket is one tracked issue: a numeric id, a title, an optional
//! description, a creation timestamp, a status, and an optional star
//! rating that only carries meaning once the ticket is completed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TicketTrackerError;

/// Numeric ticket identifier
///
/// Ids are assigned by the store at creation time as the pre-insert
/// collection length, so a fresh store hands out 0, 1, 2, ...
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TicketId(pub u64);

impl TicketId {
    /// Returns the raw numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TicketId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Lifecycle state of a ticket
///
/// Transitions are deliberately unrestricted at the store level: any
/// status can be set from any other. The interactive front end only
/// offers a subset (created → ongoing, ongoing → completed, any →
/// created), but the setter itself does not enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Freshly filed, nobody is on it yet
    #[default]
    Created,
    /// Under assistance
    Ongoing,
    /// Resolved; eligible for a rating
    Completed,
}

impl Status {
    /// All statuses in lifecycle order
    pub const ALL: [Self; 3] = [Self::Created, Self::Ongoing, Self::Completed];

    /// Returns true if the ticket counts as done in the summary
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Status {
    type Err = TicketTrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            other => Err(TicketTrackerError::InvalidStatus(other.to_string())),
        }
    }
}

/// Star rating entered for a completed ticket
///
/// Input is coerced the way the store has always coerced it: whatever
/// the user typed is parsed as a float, and anything non-numeric
/// becomes `NaN`. The raw value is stored unclamped; clamping to the
/// 0–5 star strip happens purely at display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(pub f64);

impl Rating {
    /// Parses free-form rating text
    ///
    /// Non-numeric input yields a `NaN` rating, which displays as zero
    /// filled stars. No range validation is performed.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(text.trim().parse().unwrap_or(f64::NAN))
    }

    /// Returns true if the stored value is an actual number
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !self.0.is_nan()
    }

    /// Number of filled stars on the 0–5 display strip
    ///
    /// `NaN` and negative values fill zero stars; values above 5 fill
    /// all five.
    #[must_use]
    pub fn stars(self) -> u8 {
        (1..=5u8).filter(|&i| f64::from(i) <= self.0).count() as u8
    }
}

impl fmt::Display for Rating {
    /// Renders the five-star strip, e.g. `★★★☆☆`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = usize::from(self.stars());
        write!(f, "{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// One tracked issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique id within the owning store
    pub id: TicketId,
    /// Display name; may be empty
    pub title: String,
    /// Free-form description
    pub text: Option<String>,
    /// Creation timestamp, immutable once set
    pub date: DateTime<Utc>,
    /// Current lifecycle state
    pub status: Status,
    /// Star rating, meaningful only when completed
    pub rating: Option<Rating>,
}

impl Ticket {
    /// Creates a ticket with the given id, title, and description
    ///
    /// The timestamp is taken from the clock, the status starts at
    /// `created`, and no rating is set.
    #[must_use]
    pub fn new(id: TicketId, title: impl Into<String>, text: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text,
            date: Utc::now(),
            status: Status::default(),
            rating: None,
        }
    }

    /// Title to render, substituting the placeholder for empty titles
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled ticket"
        } else {
            &self.title
        }
    }
}
