//! Scoring module - Pure services that turn answers into recommendations.
//!
//! # Pipeline
//!
//! - `Scorer` - weighted, normalized per-track scores (0-100)
//! - `PatternExtractor` - keyword-driven behavioral signals (0-1)
//! - `ScoreAdjuster` - bounded pattern boost on top of the base scores
//! - `RecommendationRanker` - ordered recommendations with confidence and reasoning
//! - `InsightSynthesizer` - learning style, traits, and growth suggestions
//!
//! `ProfilingEngine` wires them together with one set of `ScoringParameters`.

mod adjuster;
mod engine;
mod insights;
mod parameters;
mod patterns;
mod profiles;
mod ranker;
mod scorer;
mod scores;
mod weights;

pub use adjuster::ScoreAdjuster;
pub use engine::{ProfilingEngine, ProfilingResult};
pub use insights::{
    DecisionPace, DeepInsights, InsightSynthesizer, LearningPreference, ProblemSolvingStyle,
    StartingDifficulty, WorkStylePreference, DELIBERATE_LATENCY_MS,
};
pub use parameters::ScoringParameters;
pub use patterns::{default_rules, KeywordRule, Pattern, PatternExtractor, PatternRule, PatternScores};
pub use ranker::{Confidence, Recommendation, RecommendationRanker};
pub use scorer::Scorer;
pub use scores::{TrackScores, MAX_SCORE, MIN_SCORE};
pub use weights::{CategoryWeights, DEFAULT_CATEGORY_WEIGHT};
