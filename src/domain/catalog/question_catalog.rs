//! The question catalog: validated, read-only reference data shared by all sessions.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

use super::{Category, Question, QuestionId, Track, TrackKey};

/// Errors raised while assembling or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog declares no tracks")]
    NoTracks,

    #[error("Track '{0}' is declared more than once")]
    DuplicateTrack(TrackKey),

    #[error("Question '{0}' is declared more than once")]
    DuplicateQuestion(QuestionId),

    #[error("Question '{0}' has no options")]
    NoOptions(QuestionId),

    #[error("Question '{question}' declares option '{option}' more than once")]
    DuplicateOption { question: QuestionId, option: String },

    #[error("Question '{question}' option '{option}' scores undeclared track '{track}'")]
    UnknownTrack {
        question: QuestionId,
        option: String,
        track: TrackKey,
    },

    #[error("Question '{question}' option '{option}' has invalid score {score} for '{track}'")]
    InvalidScore {
        question: QuestionId,
        option: String,
        track: TrackKey,
        score: f64,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk layout of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    tracks: Vec<Track>,
    questions: Vec<Question>,
}

/// Immutable catalog of tracks and questions.
///
/// Tracks keep their declaration order; ranking ties are broken by it.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    tracks: Vec<Track>,
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// Builds a catalog, validating its structure.
    pub fn new(tracks: Vec<Track>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        Self::validate(&tracks, &questions)?;
        Ok(Self::assemble(tracks, questions))
    }

    /// Parses and validates a YAML catalog document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(yaml)?;
        Self::new(doc.tracks, doc.questions)
    }

    /// Reads, parses, and validates a YAML catalog file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Builds the index without validating. Only for data known to be valid.
    pub(crate) fn assemble(tracks: Vec<Track>, questions: Vec<Question>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Self {
            tracks,
            questions,
            index,
        }
    }

    fn validate(tracks: &[Track], questions: &[Question]) -> Result<(), CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::NoTracks);
        }

        let mut track_keys = HashSet::new();
        for track in tracks {
            if !track_keys.insert(&track.key) {
                return Err(CatalogError::DuplicateTrack(track.key.clone()));
            }
        }

        let mut question_ids = HashSet::new();
        for question in questions {
            if !question_ids.insert(&question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.id.clone()));
            }

            let mut codes = HashSet::new();
            for option in &question.options {
                if !codes.insert(&option.code) {
                    return Err(CatalogError::DuplicateOption {
                        question: question.id.clone(),
                        option: option.code.to_string(),
                    });
                }
                for (track, &score) in &option.scores {
                    if !track_keys.contains(track) {
                        return Err(CatalogError::UnknownTrack {
                            question: question.id.clone(),
                            option: option.code.to_string(),
                            track: track.clone(),
                        });
                    }
                    if !score.is_finite() || score < 0.0 {
                        return Err(CatalogError::InvalidScore {
                            question: question.id.clone(),
                            option: option.code.to_string(),
                            track: track.clone(),
                            score,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Tracks in declaration order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, key: &TrackKey) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.key == key)
    }

    pub fn track_keys(&self) -> impl Iterator<Item = &TrackKey> {
        self.tracks.iter().map(|t| &t.key)
    }

    /// Questions in declaration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    pub fn questions_in(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.category == category)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OptionCode, QuestionOption};
    use std::io::Write;

    fn key(k: &str) -> TrackKey {
        TrackKey::new(k).unwrap()
    }

    fn track(k: &str) -> Track {
        Track::new(key(k), k, "", vec![])
    }

    fn question(id: &str, options: Vec<QuestionOption>) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            "prompt",
            Category::WorkStyle,
            options,
        )
    }

    fn option(code: &str, track: &str, score: f64) -> QuestionOption {
        QuestionOption::new(OptionCode::new(code).unwrap(), code).with_score(key(track), score)
    }

    #[test]
    fn valid_catalog_indexes_questions() {
        let catalog = QuestionCatalog::new(
            vec![track("defender")],
            vec![question("q1", vec![option("A", "defender", 2.0)])],
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.question(&QuestionId::new("q1").unwrap()).is_some());
        assert!(catalog.question(&QuestionId::new("q2").unwrap()).is_none());
    }

    #[test]
    fn rejects_duplicate_question_ids() {
        let result = QuestionCatalog::new(
            vec![track("defender")],
            vec![
                question("q1", vec![option("A", "defender", 1.0)]),
                question("q1", vec![option("A", "defender", 1.0)]),
            ],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateQuestion(_))));
    }

    #[test]
    fn rejects_duplicate_option_codes() {
        let result = QuestionCatalog::new(
            vec![track("defender")],
            vec![question(
                "q1",
                vec![option("A", "defender", 1.0), option("a", "defender", 2.0)],
            )],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateOption { .. })));
    }

    #[test]
    fn rejects_scores_for_undeclared_tracks() {
        let result = QuestionCatalog::new(
            vec![track("defender")],
            vec![question("q1", vec![option("A", "offensive", 1.0)])],
        );
        assert!(matches!(result, Err(CatalogError::UnknownTrack { .. })));
    }

    #[test]
    fn rejects_negative_scores() {
        let result = QuestionCatalog::new(
            vec![track("defender")],
            vec![question("q1", vec![option("A", "defender", -1.0)])],
        );
        assert!(matches!(result, Err(CatalogError::InvalidScore { .. })));
    }

    #[test]
    fn rejects_questions_without_options() {
        let result = QuestionCatalog::new(vec![track("defender")], vec![question("q1", vec![])]);
        assert!(matches!(result, Err(CatalogError::NoOptions(_))));
    }

    #[test]
    fn rejects_empty_track_list() {
        let result = QuestionCatalog::new(vec![], vec![]);
        assert!(matches!(result, Err(CatalogError::NoTracks)));
    }

    #[test]
    fn loads_yaml_file() {
        let yaml = r#"
tracks:
  - key: defender
    name: Defender
    description: Blue team
    career_paths: [SOC Analyst]
  - key: offensive
    name: Offensive
    description: Red team
questions:
  - id: q1
    prompt: How do you react to a threat?
    category: scenario_preference
    options:
      - code: a
        text: Contain it
        scores: { defender: 3 }
      - code: b
        text: Exploit it
        scores: { offensive: 3 }
      - code: c
        text: Not sure
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let catalog = QuestionCatalog::from_yaml_file(file.path()).unwrap();

        assert_eq!(catalog.tracks().len(), 2);
        assert_eq!(catalog.tracks()[0].key.as_str(), "defender");
        let q = catalog.question(&QuestionId::new("q1").unwrap()).unwrap();
        assert_eq!(q.category, Category::ScenarioPreference);
        assert_eq!(q.options[0].code.as_str(), "A");
        assert_eq!(q.best_option_score(), 3.0);
        assert!(!q.options[2].is_scoring());
    }

    #[test]
    fn yaml_parse_errors_surface() {
        let result = QuestionCatalog::from_yaml_str("tracks: [");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = QuestionCatalog::from_yaml_file("/nonexistent/catalog.yaml");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
