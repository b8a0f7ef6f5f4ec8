//! Request validation for each route.
//!
//! Every function takes the raw, already-parsed request input and returns
//! either a typed value or a `ValidationError`. They only check presence,
//! type and UUID format. Unknown body keys are ignored.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::types::{BookId, FlagsUpdate, NewBook};

/// Length of a hyphenated UUID (8-4-4-4-12).
const HYPHENATED_UUID_LEN: usize = 36;

/// Reasons a request is rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is not a JSON object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present with the wrong JSON type.
    #[error("field `{field}` must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// A path parameter is not a hyphenated UUID.
    #[error("`{field}` must be a UUID, got `{value}`")]
    InvalidUuid { field: &'static str, value: String },
}

/// A request body that can be validated from raw JSON.
pub trait BodySchema: Sized {
    fn from_body(body: &Value) -> Result<Self, ValidationError>;
}

impl BodySchema for NewBook {
    fn from_body(body: &Value) -> Result<Self, ValidationError> {
        validate_create(body)
    }
}

impl BodySchema for FlagsUpdate {
    fn from_body(body: &Value) -> Result<Self, ValidationError> {
        validate_update(body)
    }
}

/// Validate a create body: `title`, `author` and `description` must all be
/// strings.
pub fn validate_create(body: &Value) -> Result<NewBook, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(NewBook {
        title: required_string(object, "title")?,
        author: required_string(object, "author")?,
        description: required_string(object, "description")?,
    })
}

/// Validate the `bookId` path parameter.
pub fn validate_book_id(raw: &str) -> Result<BookId, ValidationError> {
    let invalid = || ValidationError::InvalidUuid {
        field: "bookId",
        value: raw.to_string(),
    };

    // Uuid::try_parse also accepts the simple, braced and urn forms.
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(invalid());
    }

    Uuid::try_parse(raw).map(BookId).map_err(|_| invalid())
}

/// Validate an update body. Every flag is optional; a missing body counts
/// as `{}`.
pub fn validate_update(body: &Value) -> Result<FlagsUpdate, ValidationError> {
    let object = match body {
        Value::Null => return Ok(FlagsUpdate::default()),
        Value::Object(object) => object,
        _ => return Err(ValidationError::NotAnObject),
    };

    Ok(FlagsUpdate {
        is_favorite: optional_bool(object, "isFavorite")?,
        is_reading: optional_bool(object, "isReading")?,
        is_finished: optional_bool(object, "isFinished")?,
    })
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "string",
        }),
    }
}

fn optional_bool(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, ValidationError> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "boolean",
        }),
    }
}
