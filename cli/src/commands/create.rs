//! CREATE command - Add a new book.

use anyhow::Result;
use bookshelf_core::NewBook;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Short description
    #[arg(default_value = "")]
    pub description: String,
}

/// Response from creating a book.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookResponse {
    pub book_id: Uuid,
}

impl HumanReadable for CreateBookResponse {
    fn print_human(&self) {
        println!("{}", "Book created successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.book_id);
    }
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/books", base_url);

    let request_body = NewBook::new(args.title, args.author, args.description);

    let response: CreateBookResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
