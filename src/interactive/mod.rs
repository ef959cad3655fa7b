//! Interactive session for ticket-tracker
//!
//! This is the tracker's main surface: a guided loop over the
//! in-memory store, mirroring the list screen the tool grew out of.
//! Tickets can be expanded and collapsed inline, moved between
//! statuses, rated once completed, edited, and deleted. All state is
//! discarded when the session ends.

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::collections::HashSet;
use tracing::info;

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::{format_summary, format_ticket_details, format_ticket_row};
use crate::config::AppConfig;
use crate::core::{Status, TicketId, TicketStore};
use crate::error::Result;

/// Outcome of one pass through the main menu
enum MenuChoice {
    Add,
    Open(TicketId),
    Quit,
}

/// One interactive tracker session
///
/// Owns the store exclusively for its lifetime; there is no way to
/// observe or mutate the collection from outside while it runs.
pub struct Session<'a> {
    store: TicketStore,
    expanded: HashSet<TicketId>,
    theme: ColorfulTheme,
    config: AppConfig,
    output: &'a OutputFormatter,
}

impl<'a> Session<'a> {
    /// Create a session over the given store
    #[must_use]
    pub fn new(store: TicketStore, config: AppConfig, output: &'a OutputFormatter) -> Self {
        Self {
            store,
            expanded: HashSet::new(),
            theme: ColorfulTheme::default(),
            config,
            output,
        }
    }

    /// Run the session loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        info!("starting interactive session");
        loop {
            self.render();
            match self.main_menu()? {
                MenuChoice::Add => self.prompt_add()?,
                MenuChoice::Open(id) => self.ticket_menu(id)?,
                MenuChoice::Quit => break,
            }
        }

        let summary = self.store.summary();
        println!(
            "\nSession over — {} resolved, {} remaining. State is not persisted.",
            summary.done, summary.remaining
        );
        Ok(())
    }

    /// Render the header and the ticket list
    fn render(&self) {
        let summary = self.store.summary();
        println!();
        println!("{}", "Ticket List".bold());
        println!(
            "{}",
            format!("You have {} issues remaining", summary.remaining).italic()
        );
        println!("{}", format_summary(summary.done, summary.remaining));
        println!();

        if self.store.is_empty() {
            println!("  (no tickets yet)");
            return;
        }

        for ticket in self.store.tickets() {
            println!("  {}", format_ticket_row(ticket, &self.config.date_format));
            if self.expanded.contains(&ticket.id) {
                println!("{}", format_ticket_details(ticket));
            }
        }
    }

    /// Main menu: add a ticket, open one, or quit
    fn main_menu(&self) -> Result<MenuChoice> {
        let mut items = vec!["Add a ticket".to_string()];
        for ticket in self.store.tickets() {
            items.push(format!("Open #{} {}", ticket.id, ticket.display_title()));
        }
        items.push("Quit".to_string());

        let selection = Select::with_theme(&self.theme)
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == 0 {
            return Ok(MenuChoice::Add);
        }
        if selection == items.len() - 1 {
            return Ok(MenuChoice::Quit);
        }
        Ok(MenuChoice::Open(self.store.tickets()[selection - 1].id))
    }

    /// The add-ticket prompt, the modal analog
    ///
    /// Both fields may be left empty; an empty title renders with the
    /// placeholder.
    fn prompt_add(&mut self) -> Result<()> {
        let title: String = Input::with_theme(&self.theme)
            .with_prompt("Title")
            .allow_empty(true)
            .interact_text()?;
        let description: String = Input::with_theme(&self.theme)
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;

        let text = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        let id = self.store.add(title, text).id;
        self.output.success(&format!("Added ticket #{id}"));
        Ok(())
    }

    /// Per-ticket action menu; opening a ticket expands it
    ///
    /// The choices offered match what the ticket's status allows on
    /// the original screen: created tickets can move to ongoing,
    /// ongoing ones can complete or revert, completed ones can revert
    /// or take a rating. Edit and delete are always available.
    fn ticket_menu(&mut self, id: TicketId) -> Result<()> {
        self.expanded.insert(id);
        self.render();

        let Some(ticket) = self.store.get(id) else {
            return Ok(());
        };

        let mut items: Vec<&str> = match ticket.status {
            Status::Created => vec!["Mark under assistance"],
            Status::Ongoing => vec!["Mark complete", "Revert"],
            Status::Completed => vec!["Rate", "Revert"],
        };
        items.extend(["Edit", "Delete", "Collapse"]);

        let selection = Select::with_theme(&self.theme)
            .with_prompt(format!("Ticket #{id}"))
            .items(&items)
            .default(0)
            .interact()?;

        match items[selection] {
            "Mark under assistance" => self.store.set_status(id, Status::Ongoing),
            "Mark complete" => self.store.set_status(id, Status::Completed),
            "Revert" => self.store.set_status(id, Status::Created),
            "Rate" => self.prompt_rating(id)?,
            "Edit" => self.prompt_edit(id)?,
            "Delete" => {
                self.store.remove(id);
                self.expanded.remove(&id);
                self.output.warning(&format!("Deleted ticket #{id}"));
            },
            _ => {
                self.expanded.remove(&id);
            },
        }
        Ok(())
    }

    /// Rating prompt for a completed ticket
    ///
    /// Whatever is typed goes to the store as-is; non-numeric input is
    /// accepted and shows as zero stars.
    fn prompt_rating(&mut self, id: TicketId) -> Result<()> {
        let text: String = Input::with_theme(&self.theme)
            .with_prompt("Rating (0-5)")
            .allow_empty(true)
            .interact_text()?;
        self.store.set_rating(id, &text);

        if let Some(ticket) = self.store.get(id) {
            if let Some(rating) = ticket.rating {
                println!("{rating}");
            }
        }
        Ok(())
    }

    /// Edit prompt: replace title and description, keep everything else
    fn prompt_edit(&mut self, id: TicketId) -> Result<()> {
        let current_title = self
            .store
            .get(id)
            .map(|t| t.title.clone())
            .unwrap_or_default();
        let title: String = Input::with_theme(&self.theme)
            .with_prompt("Title")
            .with_initial_text(current_title)
            .allow_empty(true)
            .interact_text()?;
        let description: String = Input::with_theme(&self.theme)
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;

        let text = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self.store.edit(id, title, text);
        Ok(())
    }
}
