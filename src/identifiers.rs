//! Domain identifier types for board deduplication.
//!
//! These types provide type-safe wrappers around the string encodings used to
//! deduplicate board states during search.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Unique identifier for a board state in the search space.
///
/// BoardKeys are the canonical row-major tile encodings of boards. Two boards
/// compare equal under a key iff every cell matches; no symmetry folding is
/// applied, so rotations and reflections of a seen board are distinct keys.
///
/// # Examples
///
/// ```
/// use pegsol::board::Board;
///
/// let key = Board::standard().key();
/// assert_eq!(key.as_str().len(), 49);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardKey(String);

impl BoardKey {
    /// Create a new board key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the key into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for BoardKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<BoardKey> for &str {
    fn eq(&self, other: &BoardKey) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for BoardKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for BoardKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BoardKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for BoardKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
