//! Database models for the storage layer.
//!
//! `BookRow` maps directly to a row of the `books` table. It stays separate
//! from the domain `Book` so column naming does not leak into the API.

use bookshelf_core::{Book, BookId};
use sqlx::FromRow;
use uuid::Uuid;

/// Columns selected for every book query.
pub(crate) const BOOK_COLUMNS: &str =
    "id, title, author, description, is_favorite, is_reading, is_finished";

/// Database row for the `books` table.
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub description: String,
    pub is_favorite: bool,
    pub is_reading: bool,
    pub is_finished: bool,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::from_uuid(row.id),
            title: row.title,
            author: row.author,
            description: row.description,
            is_favorite: row.is_favorite,
            is_reading: row.is_reading,
            is_finished: row.is_finished,
        }
    }
}
