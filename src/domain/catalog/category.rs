//! Question categories ("modules") of the profiler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Facet of the learner that a question measures.
///
/// Categories partition the catalog: every question belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    IdentityValue,
    CyberAptitude,
    TechnicalExposure,
    ScenarioPreference,
    WorkStyle,
    DifficultySelection,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 6] = [
        Category::IdentityValue,
        Category::CyberAptitude,
        Category::TechnicalExposure,
        Category::ScenarioPreference,
        Category::WorkStyle,
        Category::DifficultySelection,
    ];

    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::IdentityValue => "identity_value",
            Category::CyberAptitude => "cyber_aptitude",
            Category::TechnicalExposure => "technical_exposure",
            Category::ScenarioPreference => "scenario_preference",
            Category::WorkStyle => "work_style",
            Category::DifficultySelection => "difficulty_selection",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ValidationError::invalid_format("category", format!("unknown category '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_wire_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_rejects_unknown_names() {
        assert!("hobbies".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::ScenarioPreference).unwrap();
        assert_eq!(json, "\"scenario_preference\"");
    }
}
