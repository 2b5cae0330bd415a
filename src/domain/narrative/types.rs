//! Narrative inputs and outputs.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::TrackKey;

/// Aggregate learner activity fed to the narrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub track: TrackKey,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub missions_completed: u32,
    /// Mean mission score, 0-100.
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub hours_spent: f64,
    /// Curriculum progress, 0-100.
    #[serde(default)]
    pub progress_percent: f64,
}

impl ActivitySummary {
    /// A learner with no activity yet.
    pub fn starting(track: TrackKey) -> Self {
        Self {
            track,
            display_name: None,
            missions_completed: 0,
            average_score: 0.0,
            hours_spent: 0.0,
            progress_percent: 0.0,
        }
    }

    pub fn is_just_starting(&self) -> bool {
        self.missions_completed == 0 && self.hours_spent <= 0.0
    }
}

/// The "Future-You" career identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub archetype: String,
    pub career_vision: String,
    pub projected_skills: Vec<String>,
    pub estimated_career_level: String,
    pub predicted_roles: Vec<String>,
}

/// Where a narrative came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Provider,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeInsights {
    pub persona: Persona,
    /// Career readiness, 0-95.
    pub readiness_percent: f64,
    pub narrative: String,
    pub gap_analysis: Vec<String>,
    pub next_steps: Vec<String>,
    pub source: NarrativeSource,
}
