//! bookshelf-store: Storage layer for the Bookshelf API
//!
//! This crate provides:
//! - The `BookRepository` trait the HTTP handlers are written against
//! - A PostgreSQL implementation (`Store`) built on sqlx
//! - An in-memory implementation (`MemoryStore`) for tests and local runs
//! - Embedded, idempotent schema migrations
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_store::{BookRepository, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let book = store.create(&NewBook::new("Dune", "Herbert", "...")).await?;
//! let all = store.find_all().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::BookRow;
pub use repository::BookRepository;
pub use store::{Store, StoreConfig};

// Re-export bookshelf-core for downstream crates
pub use bookshelf_core;
