//! Scorer - weighted per-track affinity scores.

use std::collections::HashMap;

use super::{CategoryWeights, TrackScores, MAX_SCORE};
use crate::domain::catalog::{QuestionCatalog, TrackKey};
use crate::domain::profiling::ProfilingSession;

/// Computes normalized per-track scores from a session's answers.
///
/// Each answer adds `option_score * category_weight` to every track in the
/// chosen option's vector. Totals are divided by a reference maximum: the
/// catalog-wide mean of `best_option_score * category_weight`, times the number
/// of answers given. Answers that no longer resolve against the catalog are
/// skipped and do not count toward the reference.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: CategoryWeights,
}

impl Scorer {
    pub fn new(weights: CategoryWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Scores every catalog track in [0, 100].
    pub fn calculate(&self, session: &ProfilingSession, catalog: &QuestionCatalog) -> TrackScores {
        let mut totals: HashMap<&TrackKey, f64> = HashMap::new();
        let mut resolved = 0usize;

        for response in session.responses() {
            let Some(question) = catalog.question(&response.question_id) else {
                tracing::debug!(question_id = %response.question_id, "skipping answer to unknown question");
                continue;
            };
            let Some(option) = question.option(&response.option) else {
                tracing::debug!(
                    question_id = %response.question_id,
                    option = %response.option,
                    "skipping answer with unknown option"
                );
                continue;
            };

            resolved += 1;
            let weight = self.weights.weight(question.category);
            for (track, score) in &option.scores {
                *totals.entry(track).or_insert(0.0) += score * weight;
            }
        }

        let reference = self.average_best_score(catalog) * resolved as f64;

        catalog
            .track_keys()
            .map(|track| {
                let score = if reference > 0.0 {
                    totals.get(track).copied().unwrap_or(0.0) / reference * MAX_SCORE
                } else {
                    0.0
                };
                (track.clone(), score)
            })
            .collect()
    }

    /// Catalog-wide mean of each question's best weighted option score.
    fn average_best_score(&self, catalog: &QuestionCatalog) -> f64 {
        if catalog.is_empty() {
            return 0.0;
        }
        let sum: f64 = catalog
            .questions()
            .iter()
            .map(|q| q.best_option_score() * self.weights.weight(q.category))
            .sum();
        sum / catalog.len() as f64
    }
}
