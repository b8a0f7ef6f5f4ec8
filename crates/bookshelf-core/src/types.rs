//! Core data types for the Bookshelf API.
//!
//! A `Book` is created once with its descriptive fields and afterwards only
//! its three read-state flags change. The identifier is assigned by the
//! store and never modified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a book.
///
/// Wraps a UUID so book ids cannot be confused with other UUID values
/// (request ids, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Creates a new random BookId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a BookId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Book
// ============================================================================

/// Fields supplied when creating a book.
///
/// Empty strings are allowed; the only requirement is that all three are
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: description.into(),
        }
    }
}

/// The mutable part of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingFlags {
    pub is_favorite: bool,
    pub is_reading: bool,
    pub is_finished: bool,
}

/// A stored book record.
///
/// Serializes to the wire shape
/// `{id, title, author, description, isFavorite, isReading, isFinished}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub is_favorite: bool,
    pub is_reading: bool,
    pub is_finished: bool,
}

impl Book {
    /// Build a freshly created book: every flag starts out false.
    #[must_use]
    pub fn from_new(id: BookId, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            description: new.description,
            is_favorite: false,
            is_reading: false,
            is_finished: false,
        }
    }

    /// Current read-state flags.
    #[must_use]
    pub fn flags(&self) -> ReadingFlags {
        ReadingFlags {
            is_favorite: self.is_favorite,
            is_reading: self.is_reading,
            is_finished: self.is_finished,
        }
    }

    /// Overwrite the read-state flags, leaving every other field untouched.
    pub fn set_flags(&mut self, flags: ReadingFlags) {
        self.is_favorite = flags.is_favorite;
        self.is_reading = flags.is_reading;
        self.is_finished = flags.is_finished;
    }
}

// ============================================================================
// Partial Update
// ============================================================================

/// A partial update of the read-state flags.
///
/// `None` means the caller did not mention the flag. `Some(false)` is an
/// explicit request to clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_reading: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_finished: Option<bool>,
}

impl FlagsUpdate {
    /// Returns true if no flag was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_favorite.is_none() && self.is_reading.is_none() && self.is_finished.is_none()
    }

    /// Merge onto `current`: a supplied value wins, an omitted one keeps the
    /// stored value.
    #[must_use]
    pub fn apply(&self, current: ReadingFlags) -> ReadingFlags {
        ReadingFlags {
            is_favorite: self.is_favorite.unwrap_or(current.is_favorite),
            is_reading: self.is_reading.unwrap_or(current.is_reading),
            is_finished: self.is_finished.unwrap_or(current.is_finished),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
