//! Command handlers for the one-shot CLI subcommands

pub mod common;
mod list;
mod show;
mod summary;

pub use list::handle_list_command;
pub use show::handle_show_command;
pub use summary::handle_summary_command;
