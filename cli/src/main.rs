//! Command-line interface for the Bookshelf API.
//!
//! Commands:
//! - create: Add a book
//! - list: List every book
//! - read: Show one book
//! - update: Change read-state flags
//! - delete: Remove a book
//!
//! Configuration via environment:
//! - BOOKSHELF_URL: Base URL of the bookshelf server (default: http://localhost:8080)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, list::ListArgs, read::ReadArgs, update::UpdateArgs,
};

/// Bookshelf CLI
///
/// Manage book records from the command line. Prints JSON by default;
/// pass --human for formatted output.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Bookshelf server URL
    #[arg(
        long,
        env = "BOOKSHELF_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new book
    Create(CreateArgs),

    /// List all books
    List(ListArgs),

    /// Show a single book
    Read(ReadArgs),

    /// Update the favorite/reading/finished flags of a book
    Update(UpdateArgs),

    /// Delete a book
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.timeout) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let base_url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Create(args) => {
            commands::create::execute(&client, base_url, cli.human, args).await
        }
        Commands::List(args) => commands::list::execute(&client, base_url, cli.human, args).await,
        Commands::Read(args) => commands::read::execute(&client, base_url, cli.human, args).await,
        Commands::Update(args) => {
            commands::update::execute(&client, base_url, cli.human, args).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, base_url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
