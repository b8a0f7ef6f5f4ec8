//! In-memory book repository.
//!
//! Keeps books in insertion order behind an async `RwLock`. Used by the
//! server tests and by `STORAGE_BACKEND=memory` for local runs without a
//! database. Contents are lost when the process exits.

use async_trait::async_trait;
use bookshelf_core::{Book, BookId, NewBook, ReadingFlags};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::repository::BookRepository;

/// Volatile `BookRepository` implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Whether the store holds no books.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookRepository for MemoryStore {
    async fn create(&self, book: &NewBook) -> StoreResult<Book> {
        let created = Book::from_new(BookId::new(), book.clone());
        self.books.write().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn update_flags(&self, id: BookId, flags: ReadingFlags) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::BookNotFound(id.0))?;
        book.set_flags(flags);
        Ok(book.clone())
    }

    async fn delete(&self, id: BookId) -> StoreResult<()> {
        let mut books = self.books.write().await;
        let position = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::BookNotFound(id.0))?;
        books.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn dune() -> NewBook {
        NewBook::new("Dune", "Herbert", "Desert planet")
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_clears_flags() {
        let store = MemoryStore::new();
        let book = assert_ok!(store.create(&dune()).await);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.flags(), ReadingFlags::default());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicates_get_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.create(&dune()).await.unwrap();
        let b = store.create(&dune()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = MemoryStore::new();
        let first = store.create(&NewBook::new("A", "a", "")).await.unwrap();
        let second = store.create(&NewBook::new("B", "b", "")).await.unwrap();
        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.find_by_id(BookId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_flags_persists() {
        let store = MemoryStore::new();
        let book = store.create(&dune()).await.unwrap();
        let flags = ReadingFlags {
            is_favorite: true,
            is_reading: false,
            is_finished: true,
        };
        let updated = store.update_flags(book.id, flags).await.unwrap();
        assert_eq!(updated.flags(), flags);

        let fetched = store.find_by_id(book.id).await.unwrap().unwrap();
        assert_eq!(fetched.flags(), flags);
        assert_eq!(fetched.title, book.title);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_flags(BookId::new(), ReadingFlags::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryStore::new();
        let book = store.create(&dune()).await.unwrap();
        store.delete(book.id).await.unwrap();
        assert!(store.find_by_id(book.id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = MemoryStore::new();
        let book = store.create(&dune()).await.unwrap();
        store.delete(book.id).await.unwrap();
        let err = store.delete(book.id).await.unwrap_err();
        assert!(matches!(err, StoreError::BookNotFound(id) if id == book.id.0));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let store: std::sync::Arc<dyn BookRepository> = std::sync::Arc::new(MemoryStore::new());
        let book = store.create(&dune()).await.unwrap();
        assert_eq!(store.find_by_id(book.id).await.unwrap(), Some(book));
    }
}
