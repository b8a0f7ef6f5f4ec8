//! Book routes.
//!
//! This module implements the book endpoints:
//! - POST /books - Create a book
//! - GET /books - List every book
//! - GET /books/{book_id} - Fetch one book
//! - PATCH /books/{book_id} - Update read-state flags
//! - DELETE /books/{book_id} - Delete a book
//!
//! Each handler receives already-validated input from the extractors, makes
//! one or two repository calls and shapes the response.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use bookshelf_core::{Book, BookId, FlagsUpdate, NewBook};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extract::{BookIdParam, ValidatedJson};
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Response for POST /books.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookResponse {
    /// The created book's ID.
    pub book_id: BookId,
}

/// Response for PATCH /books/{book_id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /books - Create a new book.
///
/// # Request
///
/// Body: `{ "title": "...", "author": "...", "description": "..." }`
///
/// # Response
///
/// - 201 Created: `{ "bookId": "..." }`
/// - 400 Bad Request: Missing or mistyped field
async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(new_book): ValidatedJson<NewBook>,
) -> ApiResult<(StatusCode, Json<CreateBookResponse>)> {
    let book = state.books().create(&new_book).await?;

    tracing::info!(book_id = %book.id, title = %book.title, "Book created");

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse { book_id: book.id }),
    ))
}

/// GET /books - List all books.
async fn list_books(State(state): State<AppState>) -> ApiResult<Json<Vec<Book>>> {
    let books = state.books().find_all().await?;

    tracing::debug!(count = books.len(), "Listed books");

    Ok(Json(books))
}

/// GET /books/{book_id} - Fetch a single book.
///
/// # Response
///
/// - 200 OK: the book
/// - 400 Bad Request: `book_id` is not a UUID
/// - 404 Not Found: `{ "message": "Book not found", ... }`
async fn get_book(
    State(state): State<AppState>,
    BookIdParam(book_id): BookIdParam,
) -> ApiResult<Json<Book>> {
    state
        .books()
        .find_by_id(book_id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::book_not_found)
}

/// PATCH /books/{book_id} - Update read-state flags.
///
/// Flags absent from the body keep their stored value; an explicit `false`
/// clears the flag.
///
/// # Response
///
/// - 200 OK: `{ "message": "Book updated" }`
/// - 400 Bad Request: `book_id` is not a UUID or a flag is not a boolean
/// - 404 Not Found: Book doesn't exist
async fn update_book(
    State(state): State<AppState>,
    BookIdParam(book_id): BookIdParam,
    ValidatedJson(update): ValidatedJson<FlagsUpdate>,
) -> ApiResult<Json<MessageResponse>> {
    let books = state.books();

    let current = books
        .find_by_id(book_id)
        .await?
        .ok_or_else(ApiError::book_not_found)?;

    let merged = update.apply(current.flags());
    books.update_flags(book_id, merged).await?;

    tracing::info!(
        book_id = %book_id,
        is_favorite = merged.is_favorite,
        is_reading = merged.is_reading,
        is_finished = merged.is_finished,
        "Book updated"
    );

    Ok(Json(MessageResponse {
        message: "Book updated".to_string(),
    }))
}

/// DELETE /books/{book_id} - Delete a book.
///
/// # Response
///
/// - 204 No Content
/// - 400 Bad Request: `book_id` is not a UUID
/// - 404 Not Found: Book doesn't exist
async fn delete_book(
    State(state): State<AppState>,
    BookIdParam(book_id): BookIdParam,
) -> ApiResult<StatusCode> {
    let books = state.books();

    if books.find_by_id(book_id).await?.is_none() {
        return Err(ApiError::book_not_found());
    }

    books.delete(book_id).await?;

    tracing::info!(book_id = %book_id, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{book_id}",
            get(get_book).patch(update_book).delete(delete_book),
        )
}

// ============================================================================
// Tests
// ============================================================================
