//! LIST command - List every book.

use anyhow::Result;
use bookshelf_core::Book;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output, print_book};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show books marked as favorite
    #[arg(long)]
    pub favorites: bool,
}

/// All books returned by the server.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BookList {
    pub books: Vec<Book>,
}

impl BookList {
    /// Keep only books marked as favorite.
    pub fn retain_favorites(&mut self) {
        self.books.retain(|b| b.is_favorite);
    }
}

impl HumanReadable for BookList {
    fn print_human(&self) {
        println!("{}", "Books".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.books.is_empty() {
            println!("  {}", "(No books)".dimmed());
            return;
        }

        for book in &self.books {
            print_book(book);
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.books.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/books", base_url);

    let mut list: BookList = make_request(client.get(&url)).await?;

    // The API has no filtering; narrow the result locally.
    if args.favorites {
        list.retain_favorites();
    }

    output(&list, human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(title: &str, favorite: bool) -> serde_json::Value {
        json!({
            "id": uuid::Uuid::new_v4(),
            "title": title,
            "author": "someone",
            "description": "",
            "isFavorite": favorite,
            "isReading": !favorite,
            "isFinished": false,
        })
    }

    #[test]
    fn test_book_list_parses_bare_array() {
        let list: BookList =
            serde_json::from_value(json!([book("Dune", true), book("Emma", false)])).unwrap();
        assert_eq!(list.books.len(), 2);
        assert_eq!(list.books[0].title, "Dune");
    }

    #[test]
    fn test_retain_favorites_filters_mixed_flags() {
        let mut list: BookList = serde_json::from_value(json!([
            book("Dune", true),
            book("Emma", false),
            book("Ulysses", true),
        ]))
        .unwrap();

        list.retain_favorites();

        let titles: Vec<&str> = list.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Ulysses"]);
    }

    #[test]
    fn test_retain_favorites_on_no_favorites() {
        let mut list: BookList = serde_json::from_value(json!([book("Emma", false)])).unwrap();
        list.retain_favorites();
        assert!(list.books.is_empty());
    }
}
