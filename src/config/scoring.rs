//! Scoring configuration

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::catalog::Category;
use crate::domain::scoring::{CategoryWeights, ScoringParameters};

/// Scoring pipeline configuration. Defaults reproduce the calibrated values.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_boost_magnitude")]
    pub boost_magnitude: f64,

    #[serde(default = "default_pattern_threshold")]
    pub pattern_threshold: f64,

    #[serde(default = "default_min_responses")]
    pub min_responses: usize,

    #[serde(default = "default_high_confidence")]
    pub high_confidence_threshold: f64,

    #[serde(default = "default_medium_confidence")]
    pub medium_confidence_threshold: f64,

    #[serde(default = "default_close_match_gap")]
    pub close_match_gap: f64,

    #[serde(default = "default_top_strengths")]
    pub top_strengths: usize,

    /// Per-category overrides of the default weights
    #[serde(default)]
    pub category_weights: BTreeMap<Category, f64>,

    /// YAML catalog to use instead of the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl ScoringConfig {
    /// Builds engine parameters, merging weight overrides over the defaults.
    pub fn parameters(&self) -> ScoringParameters {
        ScoringParameters {
            boost_magnitude: self.boost_magnitude,
            pattern_threshold: self.pattern_threshold,
            min_responses: self.min_responses,
            high_confidence_threshold: self.high_confidence_threshold,
            medium_confidence_threshold: self.medium_confidence_threshold,
            close_match_gap: self.close_match_gap,
            top_strengths: self.top_strengths,
            category_weights: CategoryWeights::default().merged(&self.category_weights),
        }
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range("boost_magnitude", self.boost_magnitude, 0.0, 100.0)?;
        ValidationError::check_range("pattern_threshold", self.pattern_threshold, 0.0, 1.0)?;
        ValidationError::check_range(
            "high_confidence_threshold",
            self.high_confidence_threshold,
            0.0,
            100.0,
        )?;
        ValidationError::check_range(
            "medium_confidence_threshold",
            self.medium_confidence_threshold,
            0.0,
            100.0,
        )?;
        ValidationError::check_range("close_match_gap", self.close_match_gap, 0.0, 100.0)?;

        if self.medium_confidence_threshold > self.high_confidence_threshold {
            return Err(ValidationError::ThresholdOrder);
        }
        if let Some((category, _)) = self
            .category_weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(ValidationError::InvalidCategoryWeight(category.to_string()));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            boost_magnitude: default_boost_magnitude(),
            pattern_threshold: default_pattern_threshold(),
            min_responses: default_min_responses(),
            high_confidence_threshold: default_high_confidence(),
            medium_confidence_threshold: default_medium_confidence(),
            close_match_gap: default_close_match_gap(),
            top_strengths: default_top_strengths(),
            category_weights: BTreeMap::new(),
            catalog_path: None,
        }
    }
}

fn default_boost_magnitude() -> f64 {
    15.0
}

fn default_pattern_threshold() -> f64 {
    0.6
}

fn default_min_responses() -> usize {
    10
}

fn default_high_confidence() -> f64 {
    70.0
}

fn default_medium_confidence() -> f64 {
    50.0
}

fn default_close_match_gap() -> f64 {
    15.0
}

fn default_top_strengths() -> usize {
    3
}
