//! UPDATE command - Change read-state flags.

use anyhow::{Result, bail};
use bookshelf_core::FlagsUpdate;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the update command.
///
/// Flags that are not given keep their current value on the server.
#[derive(Args)]
pub struct UpdateArgs {
    /// Book ID to update
    pub book_id: Uuid,

    /// Mark or unmark as favorite
    #[arg(long)]
    pub favorite: Option<bool>,

    /// Mark or unmark as currently reading
    #[arg(long)]
    pub reading: Option<bool>,

    /// Mark or unmark as finished
    #[arg(long)]
    pub finished: Option<bool>,
}

impl UpdateArgs {
    fn to_update(&self) -> FlagsUpdate {
        FlagsUpdate {
            is_favorite: self.favorite,
            is_reading: self.reading,
            is_finished: self.finished,
        }
    }
}

/// Response from updating a book.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBookResponse {
    pub message: String,
}

impl HumanReadable for UpdateBookResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let update = args.to_update();
    if update.is_empty() {
        bail!("nothing to update: pass at least one of --favorite, --reading, --finished");
    }

    let url = format!("{}/books/{}", base_url, args.book_id);

    let response: UpdateBookResponse = make_request(client.patch(&url).json(&update)).await?;

    output(&response, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_body_only_has_given_flags() {
        let args = UpdateArgs {
            book_id: Uuid::nil(),
            favorite: Some(false),
            reading: None,
            finished: Some(true),
        };
        let json = serde_json::to_value(args.to_update()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"isFavorite": false, "isFinished": true})
        );
    }
}
