//! Backlog join key.
//!
//! # Responsibility
//! - Provide the typed key that links sprint tasks to backlog items.
//!
//! # Invariants
//! - An `ItemKey` is never empty or whitespace-only.
//! - The stored text is kept verbatim; matching is exact, so renames on either
//!   side silently break the link. Referential integrity stays with the caller.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display name used to join sprint tasks to their backlog item.
///
/// The planning data has no stable numeric foreign key, so the human-readable
/// item name is the join key. This newtype only guarantees the key is
/// non-empty; it cannot detect collisions or renames.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey(String);

/// Validation error for [`ItemKey`] construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKeyError {
    Empty,
}

impl Display for ItemKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "item key cannot be empty or whitespace-only"),
        }
    }
}

impl Error for ItemKeyError {}

impl ItemKey {
    /// Creates a key from a display name.
    ///
    /// # Errors
    /// - Returns [`ItemKeyError::Empty`] when the name is empty or
    ///   whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ItemKeyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ItemKeyError::Empty);
        }
        Ok(Self(name))
    }

    /// Returns the key text verbatim.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ItemKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::new(name).map_err(DeError::custom)
    }
}

/// Deserializes an optional task-side reference.
///
/// The source data marks unassigned tasks with an empty or missing
/// `backlogItem` string, so empty text maps to `None` instead of failing
/// key validation.
pub(crate) fn optional_key<'de, D>(deserializer: D) -> Result<Option<ItemKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(name) if !name.trim().is_empty() => ItemKey::new(name).map(Some).map_err(DeError::custom),
        _ => Ok(None),
    }
}
