//! Profiling questions and their weighted options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{Category, TrackKey};
use crate::domain::foundation::ValidationError;

/// Identifier of a question within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        Ok(Self(id))
    }

    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value code of an answer option ("A".."E"), stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionCode(String);

impl OptionCode {
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into().trim().to_uppercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("option"));
        }
        Ok(Self(code))
    }

    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Zero-based position of a single-letter code (A = 0), if it is one.
    pub fn ordinal(&self) -> Option<usize> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => Some(c as usize - 'A' as usize),
            _ => None,
        }
    }
}

impl TryFrom<String> for OptionCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionCode> for String {
    fn from(code: OptionCode) -> Self {
        code.0
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable answer with its per-track score vector.
///
/// Options that exist purely for UX ("I'm not sure") may carry an all-zero vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub code: OptionCode,
    pub text: String,
    #[serde(default)]
    pub scores: BTreeMap<TrackKey, f64>,
}

impl QuestionOption {
    pub fn new(code: OptionCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Builder: set the score toward one track.
    pub fn with_score(mut self, track: TrackKey, score: f64) -> Self {
        self.scores.insert(track, score);
        self
    }

    /// Highest single-track score of this option.
    pub fn max_score(&self) -> f64 {
        self.scores.values().copied().fold(0.0, f64::max)
    }

    /// Whether this option discriminates between tracks at all.
    pub fn is_scoring(&self) -> bool {
        self.max_score() > 0.0
    }
}

/// A profiling question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub category: Category,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        category: Category,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            category,
            options,
        }
    }

    /// Looks up an option by its value code.
    pub fn option(&self, code: &OptionCode) -> Option<&QuestionOption> {
        self.options.iter().find(|o| &o.code == code)
    }

    /// Best single-track score any option of this question can award.
    pub fn best_option_score(&self) -> f64 {
        self.options
            .iter()
            .map(QuestionOption::max_score)
            .fold(0.0, f64::max)
    }
}
