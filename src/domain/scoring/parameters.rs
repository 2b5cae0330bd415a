//! Tunable constants of the scoring pipeline.

use super::CategoryWeights;

/// Calibrated parameters of the scoring pipeline.
///
/// The confidence thresholds were tuned against the scorer's normalization;
/// change them together.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringParameters {
    /// Points added to a track when all of its patterns are at full strength.
    pub boost_magnitude: f64,
    /// Pattern strength above which a pattern earns its own reasoning sentence.
    pub pattern_threshold: f64,
    /// Valid answers required before a session may be completed.
    pub min_responses: usize,
    pub high_confidence_threshold: f64,
    pub medium_confidence_threshold: f64,
    /// Top-two score gap below which complementary tracks are suggested.
    pub close_match_gap: f64,
    pub top_strengths: usize,
    pub category_weights: CategoryWeights,
}

impl Default for ScoringParameters {
    fn default() -> Self {
        Self {
            boost_magnitude: 15.0,
            pattern_threshold: 0.6,
            min_responses: 10,
            high_confidence_threshold: 70.0,
            medium_confidence_threshold: 50.0,
            close_match_gap: 15.0,
            top_strengths: 3,
            category_weights: CategoryWeights::default(),
        }
    }
}
