//! Repository trait the HTTP layer is written against.
//!
//! Handlers hold an `Arc<dyn BookRepository>` so the PostgreSQL store and
//! the in-memory store are interchangeable.

use async_trait::async_trait;
use bookshelf_core::{Book, BookId, NewBook, ReadingFlags};

use crate::Store;
use crate::error::StoreResult;

/// CRUD access to book records.
///
/// Each call is a single-entity operation. Atomicity across calls is left
/// to the backing engine.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book with a freshly generated id and all flags false.
    async fn create(&self, book: &NewBook) -> StoreResult<Book>;

    /// Look up a book; `Ok(None)` when no record has this id.
    async fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>>;

    /// Every stored book.
    async fn find_all(&self) -> StoreResult<Vec<Book>>;

    /// Replace the read-state flags.
    ///
    /// Fails with `StoreError::BookNotFound` if the record is gone.
    async fn update_flags(&self, id: BookId, flags: ReadingFlags) -> StoreResult<Book>;

    /// Remove a book.
    ///
    /// Fails with `StoreError::BookNotFound` if nothing was removed.
    async fn delete(&self, id: BookId) -> StoreResult<()>;
}

#[async_trait]
impl BookRepository for Store {
    async fn create(&self, book: &NewBook) -> StoreResult<Book> {
        let created = self.insert_book(book).await?;
        tracing::debug!(book_id = %created.id, "Inserted book row");
        Ok(created)
    }

    async fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>> {
        self.get_book(id).await
    }

    async fn find_all(&self) -> StoreResult<Vec<Book>> {
        self.list_books().await
    }

    async fn update_flags(&self, id: BookId, flags: ReadingFlags) -> StoreResult<Book> {
        self.update_book_flags(id, flags).await
    }

    async fn delete(&self, id: BookId) -> StoreResult<()> {
        self.delete_book(id).await?;
        tracing::debug!(book_id = %id, "Deleted book row");
        Ok(())
    }
}
