//! Insight Synthesizer - reads ranked results and raw category answers into
//! narrative buckets. Does no scoring of its own.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::profiles::{profile_for, GENERIC_FOUNDATIONS};
use super::Recommendation;
use crate::domain::catalog::{Category, QuestionCatalog};
use crate::domain::profiling::ProfilingSession;

/// Average answer latency at or above which a learner counts as deliberate.
pub const DELIBERATE_LATENCY_MS: u64 = 8_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningPreference {
    HandsOn,
    ResearchBased,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemSolvingStyle {
    Systematic,
    Adaptive,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStylePreference {
    Collaborative,
    Independent,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPace {
    Quick,
    Deliberate,
    Unknown,
}

/// Cross-cutting insights over a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepInsights {
    pub top_strengths: Vec<String>,
    pub learning_preference: LearningPreference,
    pub problem_solving_style: ProblemSolvingStyle,
    pub work_style: WorkStylePreference,
    pub recommended_foundations: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub starting_difficulty: StartingDifficulty,
    pub decision_pace: DecisionPace,
    pub personality_traits: Vec<String>,
    pub motivation: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct InsightSynthesizer {
    top_strengths: usize,
    close_match_gap: f64,
}

impl InsightSynthesizer {
    pub fn new(top_strengths: usize, close_match_gap: f64) -> Self {
        Self {
            top_strengths,
            close_match_gap,
        }
    }

    pub fn synthesize(
        &self,
        session: &ProfilingSession,
        catalog: &QuestionCatalog,
        recommendations: &[Recommendation],
    ) -> DeepInsights {
        let top = recommendations.first();
        let profile = top.and_then(|r| profile_for(&r.track));

        let learning_preference = match vote(session, catalog, Category::TechnicalExposure) {
            Ordering::Greater => LearningPreference::HandsOn,
            Ordering::Less => LearningPreference::ResearchBased,
            Ordering::Equal => LearningPreference::Balanced,
        };
        let problem_solving_style = match vote(session, catalog, Category::CyberAptitude) {
            Ordering::Greater => ProblemSolvingStyle::Systematic,
            Ordering::Less => ProblemSolvingStyle::Adaptive,
            Ordering::Equal => ProblemSolvingStyle::Balanced,
        };
        let work_style = match vote(session, catalog, Category::WorkStyle) {
            Ordering::Greater => WorkStylePreference::Collaborative,
            Ordering::Less => WorkStylePreference::Independent,
            Ordering::Equal => WorkStylePreference::Balanced,
        };

        let top_strengths = top
            .map(|r| r.strengths.iter().take(self.top_strengths).cloned().collect())
            .unwrap_or_default();

        let recommended_foundations = profile
            .map(|p| p.foundations)
            .unwrap_or(GENERIC_FOUNDATIONS)
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut personality_traits: Vec<String> = [
            match learning_preference {
                LearningPreference::HandsOn => Some("Practical"),
                LearningPreference::ResearchBased => Some("Inquisitive"),
                LearningPreference::Balanced => None,
            },
            match problem_solving_style {
                ProblemSolvingStyle::Systematic => Some("Methodical"),
                ProblemSolvingStyle::Adaptive => Some("Adaptable"),
                ProblemSolvingStyle::Balanced => None,
            },
            match work_style {
                WorkStylePreference::Collaborative => Some("Team-oriented"),
                WorkStylePreference::Independent => Some("Self-directed"),
                WorkStylePreference::Balanced => None,
            },
        ]
        .into_iter()
        .flatten()
        .map(String::from)
        .collect();
        if let Some(profile) = profile {
            personality_traits.push(profile.trait_label.to_string());
        }

        let reflection = session.reflection();
        let motivation = [&reflection.why_cyber, &reflection.what_achieve]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        DeepInsights {
            top_strengths,
            learning_preference,
            problem_solving_style,
            work_style,
            recommended_foundations,
            growth_opportunities: self.growth_opportunities(recommendations),
            starting_difficulty: starting_difficulty(session, catalog),
            decision_pace: decision_pace(session),
            personality_traits,
            motivation,
        }
    }

    fn growth_opportunities(&self, recommendations: &[Recommendation]) -> Vec<String> {
        match recommendations {
            [first, second, ..] if first.score - second.score < self.close_match_gap => vec![
                format!(
                    "Explore complementary tracks: {} and {} are a close match for you.",
                    first.name, second.name
                ),
            ],
            [first, ..] => match profile_for(&first.track) {
                Some(profile) => profile.complements.iter().map(|s| s.to_string()).collect(),
                None => vec!["Explore adjacent tracks to round out your profile.".to_string()],
            },
            [] => Vec::new(),
        }
    }
}

impl Default for InsightSynthesizer {
    fn default() -> Self {
        Self::new(3, 15.0)
    }
}

/// Majority vote in one category: codes A and B against every other code.
fn vote(session: &ProfilingSession, catalog: &QuestionCatalog, category: Category) -> Ordering {
    let (first, second) = session
        .responses()
        .iter()
        .filter(|r| {
            catalog
                .question(&r.question_id)
                .is_some_and(|q| q.category == category && q.option(&r.option).is_some())
        })
        .fold((0usize, 0usize), |(a, b), r| match r.option.as_str() {
            "A" | "B" => (a + 1, b),
            _ => (a, b + 1),
        });
    first.cmp(&second)
}

fn starting_difficulty(session: &ProfilingSession, catalog: &QuestionCatalog) -> StartingDifficulty {
    let ordinals: Vec<usize> = session
        .responses()
        .iter()
        .filter(|r| {
            catalog
                .question(&r.question_id)
                .is_some_and(|q| {
                    q.category == Category::DifficultySelection && q.option(&r.option).is_some()
                })
        })
        .filter_map(|r| r.option.ordinal())
        .collect();

    if ordinals.is_empty() {
        return StartingDifficulty::Beginner;
    }
    let mean = ordinals.iter().sum::<usize>() as f64 / ordinals.len() as f64;
    if mean < 0.75 {
        StartingDifficulty::Beginner
    } else if mean < 1.75 {
        StartingDifficulty::Intermediate
    } else {
        StartingDifficulty::Advanced
    }
}

fn decision_pace(session: &ProfilingSession) -> DecisionPace {
    let latencies: Vec<u64> = session
        .responses()
        .iter()
        .filter_map(|r| r.latency_ms.map(u64::from))
        .collect();
    if latencies.is_empty() {
        return DecisionPace::Unknown;
    }
    let average = latencies.iter().sum::<u64>() / latencies.len() as u64;
    if average < DELIBERATE_LATENCY_MS {
        DecisionPace::Quick
    } else {
        DecisionPace::Deliberate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OptionCode, QuestionId, TrackKey};
    use crate::domain::foundation::{SessionId, UserId};
    use crate::domain::profiling::{Reflection, Response};
    use crate::domain::scoring::Confidence;

    fn session_with(answers: &[(&str, &str, Option<u32>)]) -> ProfilingSession {
        let catalog = QuestionCatalog::builtin();
        let mut session = ProfilingSession::start(SessionId::new(), UserId::new("u").unwrap());
        for (q, o, latency) in answers {
            let mut response = Response::new(QuestionId::new(*q).unwrap(), OptionCode::new(*o).unwrap());
            response.latency_ms = *latency;
            session.submit_response(&catalog, response).unwrap();
        }
        session
    }

    fn rec(track: &str, score: f64) -> Recommendation {
        Recommendation {
            track: TrackKey::new(track).unwrap(),
            name: track.to_string(),
            description: String::new(),
            score,
            confidence: Confidence::Low,
            reasoning: vec![],
            strengths: vec!["one".into(), "two".into(), "three".into(), "four".into()],
            optimal_path: String::new(),
            career_paths: vec![],
        }
    }

    #[test]
    fn classifies_by_majority_vote() {
        let session = session_with(&[
            ("te-1", "A", None),
            ("te-2", "B", None),
            ("te-3", "D", None),
            ("ca-1", "C", None),
            ("ca-2", "D", None),
            ("ws-1", "A", None),
            ("ws-2", "C", None),
        ]);
        let insights = InsightSynthesizer::default().synthesize(
            &session,
            &QuestionCatalog::builtin(),
            &[rec("defender", 80.0), rec("grc", 40.0)],
        );

        assert_eq!(insights.learning_preference, LearningPreference::HandsOn);
        assert_eq!(insights.problem_solving_style, ProblemSolvingStyle::Adaptive);
        assert_eq!(insights.work_style, WorkStylePreference::Balanced);
        assert_eq!(
            insights.personality_traits,
            vec!["Practical", "Adaptable", "Vigilant"]
        );
    }

    #[test]
    fn takes_top_strengths_and_track_foundations() {
        let insights = InsightSynthesizer::default().synthesize(
            &session_with(&[]),
            &QuestionCatalog::builtin(),
            &[rec("grc", 80.0), rec("defender", 20.0)],
        );

        assert_eq!(insights.top_strengths, vec!["one", "two", "three"]);
        assert!(insights
            .recommended_foundations
            .iter()
            .any(|f| f.contains("frameworks")));
    }

    #[test]
    fn close_top_two_suggests_complementary_tracks() {
        let synthesizer = InsightSynthesizer::default();
        let close = synthesizer.growth_opportunities(&[rec("defender", 70.0), rec("offensive", 60.0)]);
        assert_eq!(close.len(), 1);
        assert!(close[0].starts_with("Explore complementary tracks"));

        let clear = synthesizer.growth_opportunities(&[rec("defender", 90.0), rec("offensive", 60.0)]);
        assert!(clear.iter().any(|s| s.contains("Offensive techniques")));
    }

    #[test]
    fn difficulty_and_pace_from_answers() {
        let session = session_with(&[
            ("ds-1", "C", Some(3_000)),
            ("ds-2", "D", Some(4_000)),
            ("ds-3", "B", Some(5_000)),
        ]);
        let insights = InsightSynthesizer::default().synthesize(
            &session,
            &QuestionCatalog::builtin(),
            &[rec("offensive", 60.0)],
        );

        // ordinals 2, 3, 1 -> mean 2.0
        assert_eq!(insights.starting_difficulty, StartingDifficulty::Advanced);
        assert_eq!(insights.decision_pace, DecisionPace::Quick);
    }

    #[test]
    fn empty_session_defaults() {
        let insights = InsightSynthesizer::default().synthesize(
            &session_with(&[]),
            &QuestionCatalog::builtin(),
            &[],
        );
        assert_eq!(insights.starting_difficulty, StartingDifficulty::Beginner);
        assert_eq!(insights.decision_pace, DecisionPace::Unknown);
        assert!(insights.top_strengths.is_empty());
        assert!(insights.growth_opportunities.is_empty());
        assert_eq!(insights.recommended_foundations.len(), GENERIC_FOUNDATIONS.len());
    }

    #[test]
    fn motivation_echoes_reflection() {
        let mut session = session_with(&[]);
        session
            .submit_reflection(Reflection::new(Some("Protect my community".into()), None))
            .unwrap();
        let insights = InsightSynthesizer::default().synthesize(
            &session,
            &QuestionCatalog::builtin(),
            &[],
        );
        assert_eq!(insights.motivation, vec!["Protect my community"]);
    }
}
