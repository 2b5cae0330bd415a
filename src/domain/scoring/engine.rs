//! The full scoring pipeline.

use serde::{Deserialize, Serialize};

use super::{
    DeepInsights, InsightSynthesizer, PatternExtractor, PatternScores, Recommendation,
    RecommendationRanker, ScoreAdjuster, Scorer, ScoringParameters, TrackScores,
};
use crate::domain::catalog::{QuestionCatalog, TrackKey};
use crate::domain::profiling::ProfilingSession;

/// Everything computed for a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilingResult {
    /// Scores before the pattern boost.
    pub scores: TrackScores,
    pub adjusted_scores: TrackScores,
    pub patterns: PatternScores,
    pub recommendations: Vec<Recommendation>,
    pub insights: DeepInsights,
    pub primary_track: Option<TrackKey>,
}

/// Scorer → extractor → adjuster → ranker → synthesizer.
///
/// Pure: the result depends only on the session's answers, the catalog, and
/// the parameters.
#[derive(Debug)]
pub struct ProfilingEngine {
    parameters: ScoringParameters,
    scorer: Scorer,
    extractor: PatternExtractor,
    adjuster: ScoreAdjuster,
    ranker: RecommendationRanker,
    synthesizer: InsightSynthesizer,
}

impl ProfilingEngine {
    pub fn new(parameters: ScoringParameters) -> Self {
        Self::with_extractor(parameters, PatternExtractor::default())
    }

    /// Uses a custom set of pattern rules.
    pub fn with_extractor(parameters: ScoringParameters, extractor: PatternExtractor) -> Self {
        Self {
            scorer: Scorer::new(parameters.category_weights.clone()),
            extractor,
            adjuster: ScoreAdjuster::new(parameters.boost_magnitude),
            ranker: RecommendationRanker::new(
                parameters.high_confidence_threshold,
                parameters.medium_confidence_threshold,
                parameters.pattern_threshold,
            ),
            synthesizer: InsightSynthesizer::new(parameters.top_strengths, parameters.close_match_gap),
            parameters,
        }
    }

    pub fn parameters(&self) -> &ScoringParameters {
        &self.parameters
    }

    /// Runs the pipeline. Does not check `min_responses`; see `ProfilingSession::complete`.
    pub fn evaluate(&self, session: &ProfilingSession, catalog: &QuestionCatalog) -> ProfilingResult {
        let scores = self.scorer.calculate(session, catalog);
        let patterns = self.extractor.extract(session, catalog);
        let adjusted_scores = self.adjuster.apply(&scores, &patterns);
        let recommendations = self.ranker.rank(catalog, &adjusted_scores, &patterns);
        let insights = self.synthesizer.synthesize(session, catalog, &recommendations);
        let primary_track = recommendations.first().map(|r| r.track.clone());

        tracing::debug!(
            session_id = %session.id(),
            primary_track = primary_track.as_ref().map(TrackKey::as_str).unwrap_or("none"),
            "profiling pipeline evaluated"
        );

        ProfilingResult {
            scores,
            adjusted_scores,
            patterns,
            recommendations,
            insights,
            primary_track,
        }
    }
}

impl Default for ProfilingEngine {
    fn default() -> Self {
        Self::new(ScoringParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OptionCode, QuestionId};
    use crate::domain::foundation::{SessionId, UserId};
    use crate::domain::profiling::Response;
    use proptest::prelude::*;

    fn session_from(choices: &[(usize, usize)]) -> ProfilingSession {
        let catalog = QuestionCatalog::builtin();
        let mut session = ProfilingSession::start(SessionId::new(), UserId::new("u").unwrap());
        for &(q, o) in choices {
            let question = &catalog.questions()[q % catalog.len()];
            let option = &question.options[o % question.options.len()];
            session
                .upsert_response(Response::new(question.id.clone(), option.code.clone()))
                .unwrap();
        }
        session
    }

    #[test]
    fn primary_track_is_top_recommendation() {
        let catalog = QuestionCatalog::builtin();
        let session = session_from(&(0..18).map(|q| (q, 0)).collect::<Vec<_>>());
        let result = ProfilingEngine::default().evaluate(&session, &catalog);

        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(result.primary_track.as_ref(), Some(&result.recommendations[0].track));
    }

    #[test]
    fn stale_answers_do_not_change_the_result() {
        let catalog = QuestionCatalog::builtin();
        let engine = ProfilingEngine::default();
        let clean = session_from(&[(0, 1), (3, 2), (9, 0)]);
        let mut noisy = clean.clone();
        noisy
            .upsert_response(Response::new(
                QuestionId::new("retired-question").unwrap(),
                OptionCode::new("A").unwrap(),
            ))
            .unwrap();

        let a = engine.evaluate(&clean, &catalog);
        let b = engine.evaluate(&noisy, &catalog);
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.adjusted_scores, b.adjusted_scores);
        assert_eq!(a.recommendations, b.recommendations);
    }

    proptest! {
        #[test]
        fn scores_stay_in_bounds(choices in proptest::collection::vec((0usize..18, 0usize..5), 0..40)) {
            let catalog = QuestionCatalog::builtin();
            let result = ProfilingEngine::default().evaluate(&session_from(&choices), &catalog);

            for (_, score) in result.scores.iter().chain(result.adjusted_scores.iter()) {
                prop_assert!((0.0..=100.0).contains(&score));
            }
            for (_, strength) in result.patterns.iter() {
                prop_assert!((0.0..=1.0).contains(&strength));
            }
        }

        #[test]
        fn evaluation_is_deterministic(choices in proptest::collection::vec((0usize..18, 0usize..5), 0..40)) {
            let catalog = QuestionCatalog::builtin();
            let engine = ProfilingEngine::default();
            let session = session_from(&choices);

            prop_assert_eq!(engine.evaluate(&session, &catalog), engine.evaluate(&session, &catalog));
        }

        #[test]
        fn recommendations_are_sorted(choices in proptest::collection::vec((0usize..18, 0usize..5), 0..40)) {
            let catalog = QuestionCatalog::builtin();
            let result = ProfilingEngine::default().evaluate(&session_from(&choices), &catalog);

            for pair in result.recommendations.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
