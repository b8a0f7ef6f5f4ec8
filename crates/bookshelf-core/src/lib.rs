//! bookshelf-core: Domain types for the Bookshelf API
//!
//! This crate provides:
//! - The `Book` record and its typed identifier
//! - Read-state flags and the partial-update merge rule
//! - Pure request validation, one function per route
//!
//! Nothing here depends on the HTTP framework or the database, so the
//! same validation runs in the server extractors and in unit tests.

pub mod types;
pub mod validation;

pub use types::{Book, BookId, FlagsUpdate, NewBook, ReadingFlags};
pub use validation::{
    BodySchema, ValidationError, validate_book_id, validate_create, validate_update,
};
