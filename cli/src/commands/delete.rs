//! DELETE command - Remove a book.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use uuid::Uuid;

use super::{HumanReadable, output, send_no_content};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Book ID to delete
    pub book_id: Uuid,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Result printed after a delete; the server itself returns no body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub book_id: Uuid,
    pub deleted: bool,
}

impl HumanReadable for DeleteResult {
    fn print_human(&self) {
        println!("{}", "Book deleted successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.book_id);
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete book {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.book_id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = format!("{}/books/{}", base_url, args.book_id);

    send_no_content(client.delete(&url)).await?;

    output(
        &DeleteResult {
            book_id: args.book_id,
            deleted: true,
        },
        human,
    )
}
