//! Application state shared across handlers.

use std::sync::Arc;

use bookshelf_store::BookRepository;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Book repository, built once at startup.
    books: Arc<dyn BookRepository>,
}

impl AppState {
    /// Create new application state.
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// Get a reference to the book repository.
    pub fn books(&self) -> &dyn BookRepository {
        self.books.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::NewBook;
    use bookshelf_store::MemoryStore;

    #[tokio::test]
    async fn test_state_shares_injected_repository() {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone());
        let cloned = state.clone();

        let book = state
            .books()
            .create(&NewBook::new("Dune", "Herbert", ""))
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(cloned.books().find_by_id(book.id).await.unwrap(), Some(book));
    }
}
