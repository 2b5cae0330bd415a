//! In-memory profiling session repository.
//!
//! Keeps sessions in a map behind a tokio `RwLock`. Useful for tests, the CLI
//! and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::profiling::{ProfilingError, ProfilingSession, Response};
use crate::ports::ProfilingSessionRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, ProfilingSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl ProfilingSessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &ProfilingSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ProfilingSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn upsert_response(&self, id: &SessionId, response: Response) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::SessionNotFound, format!("Profiling session not found: {}", id))
        })?;

        session.upsert_response(response).map_err(|err| match err {
            ProfilingError::AlreadyCompleted(_) => {
                DomainError::new(ErrorCode::SessionCompleted, err.to_string())
            }
            other => other.into(),
        })
    }

    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.read().await.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OptionCode, QuestionCatalog, QuestionId};
    use crate::domain::foundation::UserId;
    use crate::domain::scoring::{ProfilingEngine, ScoringParameters};

    fn session() -> ProfilingSession {
        ProfilingSession::start(SessionId::new(), UserId::new("learner-1").unwrap())
    }

    fn answer(question: &str, option: &str) -> Response {
        Response::new(
            QuestionId::new(question).unwrap(),
            OptionCode::new(option).unwrap(),
        )
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemorySessionRepository::new();
        let session = session();

        repo.save(&session).await.unwrap();

        let found = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), session.id());
        assert!(repo.exists(session.id()).await.unwrap());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find_by_id(&SessionId::new()).await.unwrap().is_none());
        assert!(!repo.exists(&SessionId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn upsert_replaces_answer_to_same_question() {
        let repo = InMemorySessionRepository::new();
        let session = session();
        repo.save(&session).await.unwrap();

        assert!(repo.upsert_response(session.id(), answer("iv-1", "A")).await.unwrap());
        assert!(!repo.upsert_response(session.id(), answer("iv-1", "C")).await.unwrap());

        let stored = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.responses().len(), 1);
        assert_eq!(stored.responses()[0].option.as_str(), "C");
    }

    #[tokio::test]
    async fn upsert_unknown_session_fails() {
        let repo = InMemorySessionRepository::new();
        let err = repo
            .upsert_response(&SessionId::new(), answer("iv-1", "A"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn upsert_on_completed_session_fails() {
        let repo = InMemorySessionRepository::new();
        let catalog = QuestionCatalog::builtin();
        let engine = ProfilingEngine::new(ScoringParameters {
            min_responses: 0,
            ..ScoringParameters::default()
        });
        let mut session = session();
        session.complete(&catalog, &engine).unwrap();
        repo.save(&session).await.unwrap();

        let err = repo
            .upsert_response(session.id(), answer("iv-1", "A"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionCompleted);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let repo = InMemorySessionRepository::new();
        repo.save(&session()).await.unwrap();
        repo.clear().await;
        assert!(repo.is_empty().await);
    }
}
