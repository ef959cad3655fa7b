//! Core domain types: tickets, statuses, ratings, and the in-memory store

mod builders;
mod store;
mod ticket;

pub use builders::TicketBuilder;
pub use store::{Summary, TicketStore};
pub use ticket::{Rating, Status, Ticket, TicketId};
