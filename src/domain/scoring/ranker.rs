//! Recommendation Ranker - ordered recommendations with confidence and reasoning.

use serde::{Deserialize, Serialize};

use super::profiles::{profile_for, GENERIC_STRENGTHS};
use super::{PatternScores, TrackScores};
use crate::domain::catalog::{QuestionCatalog, Track, TrackKey};

/// How decisively the scores favor a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One track's ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub track: TrackKey,
    pub name: String,
    pub description: String,
    pub score: f64,
    pub confidence: Confidence,
    pub reasoning: Vec<String>,
    pub strengths: Vec<String>,
    pub optimal_path: String,
    pub career_paths: Vec<String>,
}

/// Sorts tracks by adjusted score and explains each placement.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRanker {
    high_threshold: f64,
    medium_threshold: f64,
    pattern_threshold: f64,
}

impl RecommendationRanker {
    pub fn new(high_threshold: f64, medium_threshold: f64, pattern_threshold: f64) -> Self {
        Self {
            high_threshold,
            medium_threshold,
            pattern_threshold,
        }
    }

    /// Highest score first; equal scores keep catalog declaration order.
    pub fn rank(
        &self,
        catalog: &QuestionCatalog,
        scores: &TrackScores,
        patterns: &PatternScores,
    ) -> Vec<Recommendation> {
        let mut ordered: Vec<(&Track, f64)> = catalog
            .tracks()
            .iter()
            .map(|t| (t, scores.get(&t.key)))
            .collect();
        // sort_by is stable
        ordered.sort_by(|a, b| b.1.total_cmp(&a.1));

        ordered
            .into_iter()
            .enumerate()
            .map(|(rank, (track, score))| self.recommend(rank, track, score, patterns))
            .collect()
    }

    pub fn confidence(&self, rank: usize, score: f64) -> Confidence {
        match rank {
            0 if score >= self.high_threshold => Confidence::High,
            0 => Confidence::Medium,
            1 | 2 if score >= self.medium_threshold => Confidence::Medium,
            _ => Confidence::Low,
        }
    }

    fn recommend(
        &self,
        rank: usize,
        track: &Track,
        score: f64,
        patterns: &PatternScores,
    ) -> Recommendation {
        let profile = profile_for(&track.key);

        let mut reasoning = vec![format!(
            "{:.0}% match with the {} track based on your responses.",
            score, track.name
        )];
        match profile {
            Some(profile) => {
                let strong: Vec<String> = profile
                    .signals
                    .iter()
                    .filter(|s| patterns.get(s.pattern) > self.pattern_threshold)
                    .map(|s| s.reason.to_string())
                    .collect();
                if strong.is_empty() {
                    reasoning.push(profile.generic_reason.to_string());
                } else {
                    reasoning.extend(strong);
                }
            }
            None => reasoning.push(format!(
                "Your answers show a solid fit for {}.",
                track.name
            )),
        }

        let strengths = profile
            .map(|p| p.strengths)
            .unwrap_or(GENERIC_STRENGTHS)
            .iter()
            .map(|s| s.to_string())
            .collect();
        let optimal_path = profile
            .map(|p| p.optimal_path.to_string())
            .unwrap_or_else(|| format!("{} fundamentals → Guided labs → Specialisation", track.name));

        Recommendation {
            track: track.key.clone(),
            name: track.name.clone(),
            description: track.description.clone(),
            score,
            confidence: self.confidence(rank, score),
            reasoning,
            strengths,
            optimal_path,
            career_paths: track.career_paths.clone(),
        }
    }
}

impl Default for RecommendationRanker {
    fn default() -> Self {
        Self::new(70.0, 50.0, 0.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::Pattern;

    fn key(k: &str) -> TrackKey {
        TrackKey::new(k).unwrap()
    }

    fn catalog(tracks: &[&str]) -> QuestionCatalog {
        QuestionCatalog::new(
            tracks
                .iter()
                .map(|k| Track::new(key(k), k.to_uppercase(), "", vec![format!("{} analyst", k)]))
                .collect(),
            vec![],
        )
        .unwrap()
    }

    fn scores(entries: &[(&str, f64)]) -> TrackScores {
        entries.iter().map(|(k, s)| (key(k), *s)).collect()
    }

    #[test]
    fn confidence_tiers() {
        let ranker = RecommendationRanker::default();
        assert_eq!(ranker.confidence(0, 85.0), Confidence::High);
        assert_eq!(ranker.confidence(0, 70.0), Confidence::High);
        assert_eq!(ranker.confidence(0, 55.0), Confidence::Medium);
        assert_eq!(ranker.confidence(1, 55.0), Confidence::Medium);
        assert_eq!(ranker.confidence(2, 49.9), Confidence::Low);
        assert_eq!(ranker.confidence(3, 30.0), Confidence::Low);
        assert_eq!(ranker.confidence(3, 90.0), Confidence::Low);
    }

    #[test]
    fn sorts_descending_and_keeps_declaration_order_on_ties() {
        let catalog = catalog(&["defender", "offensive", "grc", "innovation"]);
        let ranked = RecommendationRanker::default().rank(
            &catalog,
            &scores(&[("defender", 40.0), ("offensive", 60.0), ("grc", 40.0), ("innovation", 60.0)]),
            &PatternScores::zero(),
        );

        let order: Vec<&str> = ranked.iter().map(|r| r.track.as_str()).collect();
        assert_eq!(order, vec!["offensive", "innovation", "defender", "grc"]);
    }

    #[test]
    fn reasoning_starts_with_match_sentence_then_generic() {
        let ranked = RecommendationRanker::default().rank(
            &catalog(&["defender"]),
            &scores(&[("defender", 72.4)]),
            &PatternScores::zero(),
        );

        let reasoning = &ranked[0].reasoning;
        assert_eq!(reasoning.len(), 2);
        assert_eq!(reasoning[0], "72% match with the DEFENDER track based on your responses.");
        assert!(reasoning[1].contains("protecting systems"));
    }

    #[test]
    fn strong_patterns_replace_generic_reason() {
        let mut patterns = PatternScores::zero();
        patterns.set(Pattern::PatternRecognition, 0.9);
        patterns.set(Pattern::RiskSensitivity, 0.7);
        patterns.set(Pattern::Stability, 0.6);

        let ranked = RecommendationRanker::default().rank(
            &catalog(&["defender"]),
            &scores(&[("defender", 50.0)]),
            &patterns,
        );

        let reasoning = &ranked[0].reasoning;
        assert_eq!(reasoning.len(), 3);
        assert!(reasoning[1].contains("patterns and anomalies"));
        assert!(reasoning[2].contains("risk"));
    }

    #[test]
    fn unknown_tracks_get_generic_guidance() {
        let ranked = RecommendationRanker::default().rank(
            &catalog(&["forensics"]),
            &scores(&[("forensics", 10.0)]),
            &PatternScores::zero(),
        );

        let rec = &ranked[0];
        assert_eq!(rec.strengths.len(), GENERIC_STRENGTHS.len());
        assert!(rec.optimal_path.starts_with("FORENSICS fundamentals"));
        assert_eq!(rec.career_paths, vec!["forensics analyst".to_string()]);
        assert_eq!(rec.confidence, Confidence::Medium);
    }
}
