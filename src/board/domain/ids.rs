//! Identifier types for the board domain.

use super::BoardValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Returns the trimmed identifier, or `None` when it is empty or contains
/// interior whitespace.
fn normalize_identifier(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    Some(trimmed)
}

/// Stable identifier for a task, unique across the whole board.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardValueError::EmptyTaskId`] when the value is blank, or
    /// [`BoardValueError::InvalidIdentifier`] when it contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardValueError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(BoardValueError::EmptyTaskId);
        }
        normalize_identifier(&raw)
            .map(|id| Self(id.to_owned()))
            .ok_or(BoardValueError::InvalidIdentifier(raw))
    }

    /// Generates a fresh identifier for a task created by the host without a
    /// natural key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = BoardValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier for a column. The same value is used as the status of
/// every task the column contains.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a validated column identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardValueError::EmptyColumnId`] when the value is blank, or
    /// [`BoardValueError::InvalidIdentifier`] when it contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardValueError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(BoardValueError::EmptyColumnId);
        }
        normalize_identifier(&raw)
            .map(|id| Self(id.to_owned()))
            .ok_or(BoardValueError::InvalidIdentifier(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColumnId {
    type Error = BoardValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnId> for String {
    fn from(value: ColumnId) -> Self {
        value.0
    }
}

impl AsRef<str> for ColumnId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
