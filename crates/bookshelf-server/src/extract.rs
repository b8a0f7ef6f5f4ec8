//! Validating extractors.
//!
//! These only adapt axum's request parts to the pure validation functions in
//! `bookshelf_core::validation`. Every rejection becomes a 400 `ApiError`,
//! so malformed input never reaches a handler or the store.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use bookshelf_core::{BodySchema, BookId, validate_book_id};
use serde_json::Value;

use crate::error::ApiError;

/// The `{book_id}` path segment, validated as a hyphenated UUID.
#[derive(Debug, Clone, Copy)]
pub struct BookIdParam(pub BookId);

impl<S> FromRequestParts<S> for BookIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self(validate_book_id(&raw)?))
    }
}

/// A JSON body validated by its `BodySchema`.
///
/// The body is read as raw bytes so that a missing `Content-Type` does not
/// matter. An empty (or whitespace-only) body is presented to the schema as
/// JSON `null`. Body read failures keep axum's status, so an oversized body
/// is still a 413.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: BodySchema + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        let value = parse_body(&bytes)?;
        Ok(Self(T::from_body(&value)?))
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::BadRequest(format!("malformed JSON body: {}", e)))
}
