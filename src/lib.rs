//! ticket-tracker - a session-scoped ticket tracker for the terminal
//!
//! This crate tracks support tickets for the lifetime of one session:
//! - An in-memory [`core::TicketStore`] holding the ordered ticket list
//! - Status transitions (`created`, `ongoing`, `completed`) and a
//!   permissive star rating for completed tickets
//! - An interactive terminal session plus read-only one-shot commands
//!
//! There is deliberately no persistence: the store is created when a
//! session starts and discarded when it ends.
//!
//! # Example
//!
//! ```rust
//! use ticket_tracker::core::{Status, TicketStore};
//!
//! let mut store = TicketStore::new();
//! let id = store.add("Fix login", Some("Users cannot sign in".to_string())).id;
//! store.set_status(id, Status::Completed);
//! store.set_rating(id, "4");
//!
//! let summary = store.summary();
//! assert_eq!(summary.done, 1);
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;

// Re-export commonly used types
pub use error::{Result, TicketTrackerError};
