//! Behavioral Pattern Extractor - keyword heuristics over answered prompts.
//!
//! Patterns are a secondary signal, independent of the option score vectors.
//! Each `PatternRule` decides whether one answered question is evidence for
//! its pattern; the extractor counts matches and normalizes them to [0, 1].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::catalog::{OptionCode, Question, QuestionCatalog};
use crate::domain::profiling::ProfilingSession;

/// Behavioral traits the extractor can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    PatternRecognition,
    Stability,
    RiskSensitivity,
    Curiosity,
    Exploration,
    AnalyticalLateralThinking,
    DocumentationClarity,
    StructuredThinking,
    GovernanceAlignment,
    Creativity,
    AutomationInterest,
    SystemsThinking,
    Communication,
    DecisionClarity,
    ValueDriven,
}

impl Pattern {
    pub const ALL: [Pattern; 15] = [
        Pattern::PatternRecognition,
        Pattern::Stability,
        Pattern::RiskSensitivity,
        Pattern::Curiosity,
        Pattern::Exploration,
        Pattern::AnalyticalLateralThinking,
        Pattern::DocumentationClarity,
        Pattern::StructuredThinking,
        Pattern::GovernanceAlignment,
        Pattern::Creativity,
        Pattern::AutomationInterest,
        Pattern::SystemsThinking,
        Pattern::Communication,
        Pattern::DecisionClarity,
        Pattern::ValueDriven,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::PatternRecognition => "pattern_recognition",
            Pattern::Stability => "stability",
            Pattern::RiskSensitivity => "risk_sensitivity",
            Pattern::Curiosity => "curiosity",
            Pattern::Exploration => "exploration",
            Pattern::AnalyticalLateralThinking => "analytical_lateral_thinking",
            Pattern::DocumentationClarity => "documentation_clarity",
            Pattern::StructuredThinking => "structured_thinking",
            Pattern::GovernanceAlignment => "governance_alignment",
            Pattern::Creativity => "creativity",
            Pattern::AutomationInterest => "automation_interest",
            Pattern::SystemsThinking => "systems_thinking",
            Pattern::Communication => "communication",
            Pattern::DecisionClarity => "decision_clarity",
            Pattern::ValueDriven => "value_driven",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pattern strengths in [0, 1]; every pattern is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternScores(BTreeMap<Pattern, f64>);

impl PatternScores {
    /// All patterns at zero.
    pub fn zero() -> Self {
        Self(Pattern::ALL.iter().map(|&p| (p, 0.0)).collect())
    }

    pub fn get(&self, pattern: Pattern) -> f64 {
        self.0.get(&pattern).copied().unwrap_or(0.0)
    }

    /// Sets a pattern's strength, clamped to [0, 1].
    pub fn set(&mut self, pattern: Pattern, strength: f64) {
        let strength = if strength.is_nan() { 0.0 } else { strength.clamp(0.0, 1.0) };
        self.0.insert(pattern, strength);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pattern, f64)> + '_ {
        self.0.iter().map(|(p, s)| (*p, *s))
    }
}

impl Default for PatternScores {
    fn default() -> Self {
        Self::zero()
    }
}

/// A pluggable test for one behavioral pattern.
pub trait PatternRule: Send + Sync {
    /// The pattern this rule gives evidence for.
    fn pattern(&self) -> Pattern;

    /// Whether answering `question` with `option` counts toward the pattern.
    fn matches(&self, question: &Question, option: &OptionCode) -> bool;
}

/// Matches when the prompt contains any keyword and the chosen option is one
/// of the qualifying codes.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pattern: Pattern,
    keywords: Vec<String>,
    qualifying_codes: Vec<String>,
}

impl KeywordRule {
    pub fn new(pattern: Pattern, keywords: &[&str], qualifying_codes: &[&str]) -> Self {
        Self {
            pattern,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            qualifying_codes: qualifying_codes.iter().map(|c| c.to_uppercase()).collect(),
        }
    }
}

impl PatternRule for KeywordRule {
    fn pattern(&self) -> Pattern {
        self.pattern
    }

    fn matches(&self, question: &Question, option: &OptionCode) -> bool {
        if !self.qualifying_codes.iter().any(|c| c == option.as_str()) {
            return false;
        }
        let prompt = question.prompt.to_lowercase();
        self.keywords.iter().any(|k| prompt.contains(k.as_str()))
    }
}

/// The standard keyword table.
pub fn default_rules() -> Vec<Box<dyn PatternRule>> {
    use Pattern::*;

    let table: [(Pattern, &[&str], &[&str]); 15] = [
        (PatternRecognition, &["pattern", "recognize", "recognise", "anomal"], &["A", "B"]),
        (Stability, &["stable", "routine", "consistent"], &["A", "B"]),
        (RiskSensitivity, &["risk", "threat", "danger"], &["A", "B"]),
        (Curiosity, &["curious", "wonder", "under the hood"], &["A", "B"]),
        (Exploration, &["explore", "discover", "investigate"], &["B", "C"]),
        (AnalyticalLateralThinking, &["puzzle", "problem", "riddle"], &["B", "C"]),
        (DocumentationClarity, &["document", "report", "write-up"], &["A", "B"]),
        (StructuredThinking, &["plan", "process", "step", "structure"], &["A", "B"]),
        (GovernanceAlignment, &["policy", "compliance", "regulation", "governance"], &["A", "B"]),
        (Creativity, &["creative", "invent", "imagin"], &["B", "C"]),
        (AutomationInterest, &["automat", "script", "tool"], &["A", "B"]),
        (SystemsThinking, &["system", "network", "architecture"], &["B", "C"]),
        (Communication, &["team", "explain", "communicat", "present"], &["A", "B"]),
        (DecisionClarity, &["decide", "decision", "priorit"], &["A", "B"]),
        (ValueDriven, &["value", "mission", "protect", "purpose"], &["A", "B"]),
    ];

    table
        .iter()
        .map(|(pattern, keywords, codes)| {
            Box::new(KeywordRule::new(*pattern, keywords, codes)) as Box<dyn PatternRule>
        })
        .collect()
}

/// Runs every rule over every answer.
pub struct PatternExtractor {
    rules: Vec<Box<dyn PatternRule>>,
}

impl PatternExtractor {
    pub fn new(rules: Vec<Box<dyn PatternRule>>) -> Self {
        Self { rules }
    }

    /// Counts rule matches and normalizes each count by `max(1, answers / 10)`.
    ///
    /// Never fails: unresolvable answers are skipped and an empty session yields zeros.
    pub fn extract(&self, session: &ProfilingSession, catalog: &QuestionCatalog) -> PatternScores {
        let mut counts: BTreeMap<Pattern, usize> = BTreeMap::new();
        let mut resolved = 0usize;

        for response in session.responses() {
            let Some(question) = catalog.question(&response.question_id) else {
                tracing::debug!(question_id = %response.question_id, "no pattern signal from unknown question");
                continue;
            };
            if question.option(&response.option).is_none() {
                continue;
            }

            resolved += 1;
            for rule in &self.rules {
                if rule.matches(question, &response.option) {
                    *counts.entry(rule.pattern()).or_insert(0) += 1;
                }
            }
        }

        let divisor = (resolved as f64 / 10.0).max(1.0);
        let mut scores = PatternScores::zero();
        for (pattern, count) in counts {
            scores.set(pattern, count as f64 / divisor);
        }
        scores
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl fmt::Debug for PatternExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternExtractor")
            .field("rules", &self.rules.len())
            .finish()
    }
}
