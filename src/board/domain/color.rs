//! Validated column display colour.

use super::BoardValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex colour used to render a column, stored as lower-case `#rrggbb`.
///
/// Short `#rgb` input is expanded on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnColor(String);

impl ColumnColor {
    /// Creates a validated colour.
    ///
    /// # Errors
    ///
    /// Returns [`BoardValueError::InvalidColor`] unless the value is `#`
    /// followed by exactly three or six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardValueError> {
        let raw = value.into();
        let Some(digits) = raw.trim().strip_prefix('#') else {
            return Err(BoardValueError::InvalidColor(raw));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BoardValueError::InvalidColor(raw));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => return Err(BoardValueError::InvalidColor(raw)),
        };
        Ok(Self(format!("#{}", expanded.to_ascii_lowercase())))
    }

    /// Returns the normalised `#rrggbb` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColumnColor {
    fn default() -> Self {
        Self("#6b7280".to_owned())
    }
}

impl TryFrom<String> for ColumnColor {
    type Error = BoardValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnColor> for String {
    fn from(value: ColumnColor) -> Self {
        value.0
    }
}

impl fmt::Display for ColumnColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
