//! Profiling session aggregate.
//!
//! A session accumulates one learner's answers, keyed by question id, until it is
//! explicitly completed. Completion freezes the scores and primary track; after
//! that the session is immutable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ProfilingError, Reflection, Response};
use crate::domain::catalog::{Category, QuestionCatalog, QuestionId, TrackKey};
use crate::domain::foundation::{SessionId, Timestamp, UserId};
use crate::domain::scoring::{ProfilingEngine, ProfilingResult, TrackScores};

/// Lifecycle state of a profiling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// Answered/total counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub answered: usize,
    pub total: usize,
}

/// How far a learner has got through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub by_category: BTreeMap<Category, CategoryProgress>,
    /// Answers still needed before the session may be completed.
    pub remaining_required: usize,
}

impl Progress {
    pub fn can_complete(&self) -> bool {
        self.remaining_required == 0
    }
}

/// One learner's profiling attempt.
///
/// # Invariants
///
/// - at most one response per question id; later answers replace earlier ones in place
/// - `completed_at`, `scores` and `primary_track` are set only on completion
/// - completed sessions reject every mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilingSession {
    id: SessionId,
    user_id: UserId,
    responses: Vec<Response>,
    #[serde(default)]
    reflection: Reflection,
    status: SessionStatus,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
    scores: Option<TrackScores>,
    primary_track: Option<TrackKey>,
}

impl ProfilingSession {
    /// Starts a new, empty session.
    pub fn start(id: SessionId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            responses: Vec::new(),
            reflection: Reflection::default(),
            status: SessionStatus::InProgress,
            started_at: Timestamp::now(),
            completed_at: None,
            scores: None,
            primary_track: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Responses in the order their questions were first answered.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn response_for(&self, question_id: &QuestionId) -> Option<&Response> {
        self.responses.iter().find(|r| &r.question_id == question_id)
    }

    pub fn reflection(&self) -> &Reflection {
        &self.reflection
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Adjusted scores frozen at completion.
    pub fn scores(&self) -> Option<&TrackScores> {
        self.scores.as_ref()
    }

    pub fn primary_track(&self) -> Option<&TrackKey> {
        self.primary_track.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn authorize(&self, user_id: &UserId) -> Result<(), ProfilingError> {
        if &self.user_id == user_id {
            Ok(())
        } else {
            Err(ProfilingError::Forbidden)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates a response against the catalog, then records it.
    ///
    /// Returns `true` if the question had not been answered before.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the session is completed
    /// - `UnknownQuestion` / `UnknownOption` if the answer does not resolve
    pub fn submit_response(
        &mut self,
        catalog: &QuestionCatalog,
        response: Response,
    ) -> Result<bool, ProfilingError> {
        self.ensure_mutable()?;

        let question = catalog
            .question(&response.question_id)
            .ok_or_else(|| ProfilingError::UnknownQuestion(response.question_id.clone()))?;
        if question.option(&response.option).is_none() {
            return Err(ProfilingError::UnknownOption {
                question: response.question_id,
                option: response.option,
            });
        }

        self.upsert_response(response)
    }

    /// Records a response without catalog validation, replacing any earlier
    /// answer to the same question in place.
    ///
    /// Returns `true` if the question had not been answered before.
    pub fn upsert_response(&mut self, response: Response) -> Result<bool, ProfilingError> {
        self.ensure_mutable()?;

        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => {
                *existing = response;
                Ok(false)
            }
            None => {
                self.responses.push(response);
                Ok(true)
            }
        }
    }

    /// Replaces the free-text reflection.
    pub fn submit_reflection(&mut self, reflection: Reflection) -> Result<(), ProfilingError> {
        self.ensure_mutable()?;
        self.reflection = reflection;
        Ok(())
    }

    /// Number of responses that resolve to a question and option in the catalog.
    pub fn valid_response_count(&self, catalog: &QuestionCatalog) -> usize {
        self.responses
            .iter()
            .filter(|r| {
                catalog
                    .question(&r.question_id)
                    .is_some_and(|q| q.option(&r.option).is_some())
            })
            .count()
    }

    /// Reports answered counts overall and per category.
    pub fn progress(&self, catalog: &QuestionCatalog, min_responses: usize) -> Progress {
        let mut by_category: BTreeMap<Category, CategoryProgress> = Category::ALL
            .iter()
            .map(|&c| (c, CategoryProgress { answered: 0, total: 0 }))
            .collect();

        for question in catalog.questions() {
            let entry = by_category
                .entry(question.category)
                .or_insert(CategoryProgress { answered: 0, total: 0 });
            entry.total += 1;
            if self
                .response_for(&question.id)
                .is_some_and(|r| question.option(&r.option).is_some())
            {
                entry.answered += 1;
            }
        }

        let answered = by_category.values().map(|p| p.answered).sum();
        Progress {
            answered,
            total: catalog.len(),
            by_category,
            remaining_required: min_responses.saturating_sub(answered),
        }
    }

    /// Scores the session and locks it.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the session is completed
    /// - `InsufficientResponses` if fewer than the engine's minimum answers resolve
    pub fn complete(
        &mut self,
        catalog: &QuestionCatalog,
        engine: &ProfilingEngine,
    ) -> Result<ProfilingResult, ProfilingError> {
        self.ensure_mutable()?;

        let given = self.valid_response_count(catalog);
        let required = engine.parameters().min_responses;
        if given < required {
            return Err(ProfilingError::InsufficientResponses { given, required });
        }

        let result = engine.evaluate(self, catalog);

        self.scores = Some(result.adjusted_scores.clone());
        self.primary_track = result.primary_track.clone();
        self.status = SessionStatus::Completed;
        self.completed_at = Some(Timestamp::now());
        Ok(result)
    }

    fn ensure_mutable(&self) -> Result<(), ProfilingError> {
        if self.is_completed() {
            Err(ProfilingError::AlreadyCompleted(self.id))
        } else {
            Ok(())
        }
    }
}
