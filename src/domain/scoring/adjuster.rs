//! Score Adjuster - nudges base scores with behavioral patterns.

use super::profiles::profile_for;
use super::{PatternScores, TrackScores};

/// Adds `blend * boost_magnitude` to each profiled track, where `blend` is the
/// weighted mix of the track's three patterns. Tracks without a profile pass
/// through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAdjuster {
    boost_magnitude: f64,
}

impl ScoreAdjuster {
    pub fn new(boost_magnitude: f64) -> Self {
        Self { boost_magnitude }
    }

    pub fn apply(&self, base: &TrackScores, patterns: &PatternScores) -> TrackScores {
        base.iter()
            .map(|(track, score)| {
                let boost = profile_for(track)
                    .map(|profile| {
                        profile
                            .signals
                            .iter()
                            .map(|s| patterns.get(s.pattern) * s.weight)
                            .sum::<f64>()
                            * self.boost_magnitude
                    })
                    .unwrap_or(0.0);
                (track.clone(), score + boost)
            })
            .collect()
    }
}

impl Default for ScoreAdjuster {
    fn default() -> Self {
        Self::new(15.0)
    }
}
