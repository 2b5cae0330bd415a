//! Career track reference data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Keys of the tracks shipped with the built-in catalog.
pub mod keys {
    pub const DEFENDER: &str = "defender";
    pub const OFFENSIVE: &str = "offensive";
    pub const GRC: &str = "grc";
    pub const INNOVATION: &str = "innovation";
    pub const LEADERSHIP: &str = "leadership";
}

/// Identifier of a career track (lowercase, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackKey(String);

impl TrackKey {
    /// Creates a track key, normalizing to lowercase.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into().trim().to_lowercase();
        if key.is_empty() {
            return Err(ValidationError::empty_field("track_key"));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::invalid_format(
                "track_key",
                "only letters, digits, '-' and '_' are allowed",
            ));
        }
        Ok(Self(key))
    }

    /// Builds a key from a compile-time constant known to be valid.
    pub(crate) fn from_static(key: &'static str) -> Self {
        Self(key.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrackKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrackKey> for String {
    fn from(key: TrackKey) -> Self {
        key.0
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A career specialization the profiler can recommend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub key: TrackKey,
    pub name: String,
    pub description: String,
    /// Career paths in the order they are presented.
    #[serde(default)]
    pub career_paths: Vec<String>,
}

impl Track {
    pub fn new(
        key: TrackKey,
        name: impl Into<String>,
        description: impl Into<String>,
        career_paths: Vec<String>,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            description: description.into(),
            career_paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_key_normalizes_case() {
        let key = TrackKey::new(" Defender ").unwrap();
        assert_eq!(key.as_str(), "defender");
    }

    #[test]
    fn track_key_rejects_empty_and_spaces() {
        assert!(TrackKey::new("").is_err());
        assert!(TrackKey::new("blue team").is_err());
    }

    #[test]
    fn track_key_deserializes_through_validation() {
        let key: TrackKey = serde_json::from_str("\"GRC\"").unwrap();
        assert_eq!(key.as_str(), "grc");
        assert!(serde_json::from_str::<TrackKey>("\"\"").is_err());
    }
}
