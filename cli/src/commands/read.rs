//! READ command - Show a single book.

use anyhow::Result;
use bookshelf_core::Book;
use clap::Args;
use uuid::Uuid;

use super::{HumanReadable, make_request, output, print_book};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Book ID to show
    pub book_id: Uuid,
}

impl HumanReadable for Book {
    fn print_human(&self) {
        print_book(self);
    }
}

/// Execute the read command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ReadArgs,
) -> Result<()> {
    let url = format!("{}/books/{}", base_url, args.book_id);

    let book: Book = make_request(client.get(&url)).await?;

    output(&book, human)
}
