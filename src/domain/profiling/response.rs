//! Answers and reflections recorded during a profiling session.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{OptionCode, QuestionId};

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub option: OptionCode,
    /// Time the learner took to answer, if the client measured it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u32>,
}

impl Response {
    pub fn new(question_id: QuestionId, option: OptionCode) -> Self {
        Self {
            question_id,
            option,
            latency_ms: None,
        }
    }

    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }
}

/// Free-text reflection answers. Blank answers are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    #[serde(default)]
    pub why_cyber: Option<String>,
    #[serde(default)]
    pub what_achieve: Option<String>,
}

impl Reflection {
    pub fn new(why_cyber: Option<String>, what_achieve: Option<String>) -> Self {
        Self {
            why_cyber: normalize(why_cyber),
            what_achieve: normalize(what_achieve),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.why_cyber.is_none() && self.what_achieve.is_none()
    }
}

fn normalize(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
