//! Score maps shared by the scoring pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::TrackKey;

/// Lowest and highest score a track can receive.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Per-track scores on the 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackScores(BTreeMap<TrackKey, f64>);

impl TrackScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a track's score, clamped to the valid range.
    pub fn set(&mut self, track: TrackKey, score: f64) {
        self.0.insert(track, clamp_score(score));
    }

    /// Score of a track; tracks never scored read as zero.
    pub fn get(&self, track: &TrackKey) -> f64 {
        self.0.get(track).copied().unwrap_or(MIN_SCORE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TrackKey, f64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(TrackKey, f64)> for TrackScores {
    fn from_iter<I: IntoIterator<Item = (TrackKey, f64)>>(iter: I) -> Self {
        let mut scores = TrackScores::new();
        for (track, score) in iter {
            scores.set(track, score);
        }
        scores
    }
}

/// Clamps to [0, 100]; NaN becomes 0.
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        MIN_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}
