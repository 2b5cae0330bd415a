//! GetDeepInsightsHandler - Query handler for a completed session's full result.
//!
//! Recomputes the pipeline from the stored answers; the engine is pure, so the
//! result matches what completion returned.

use std::sync::Arc;

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::profiling::ProfilingError;
use crate::domain::scoring::{ProfilingEngine, ProfilingResult};
use crate::ports::ProfilingSessionRepository;

use super::load_owned_session;

#[derive(Debug, Clone)]
pub struct GetDeepInsightsQuery {
    pub session_id: SessionId,
    pub user_id: UserId,
}

pub struct GetDeepInsightsHandler {
    catalog: Arc<QuestionCatalog>,
    engine: Arc<ProfilingEngine>,
    repository: Arc<dyn ProfilingSessionRepository>,
}

impl GetDeepInsightsHandler {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        engine: Arc<ProfilingEngine>,
        repository: Arc<dyn ProfilingSessionRepository>,
    ) -> Self {
        Self {
            catalog,
            engine,
            repository,
        }
    }

    pub async fn handle(&self, query: GetDeepInsightsQuery) -> Result<ProfilingResult, ProfilingError> {
        let session =
            load_owned_session(self.repository.as_ref(), &query.session_id, &query.user_id).await?;

        if !session.is_completed() {
            return Err(ProfilingError::NotCompleted(query.session_id));
        }

        Ok(self.engine.evaluate(&session, &self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::application::handlers::profiling::test_support::{metadata, seeded_session, user};
    use crate::application::handlers::profiling::{
        CompleteProfilingSessionCommand, CompleteProfilingSessionHandler,
    };
    use crate::domain::scoring::ScoringParameters;

    #[tokio::test]
    async fn matches_completion_result() {
        let catalog = QuestionCatalog::builtin();
        let repo = Arc::new(InMemorySessionRepository::new());
        let engine = Arc::new(ProfilingEngine::new(ScoringParameters::default()));
        let id = seeded_session(&repo, &catalog, 18).await;

        let completed = CompleteProfilingSessionHandler::new(catalog.clone(), engine.clone(), repo.clone())
            .handle(
                CompleteProfilingSessionCommand {
                    session_id: id,
                    user_id: user(),
                },
                metadata(),
            )
            .await
            .unwrap();

        let insights = GetDeepInsightsHandler::new(catalog, engine, repo)
            .handle(GetDeepInsightsQuery {
                session_id: id,
                user_id: user(),
            })
            .await
            .unwrap();

        assert_eq!(insights, completed.result);
        assert!(!insights.insights.top_strengths.is_empty());
    }

    #[tokio::test]
    async fn in_progress_session_is_not_completed() {
        let catalog = QuestionCatalog::builtin();
        let repo = Arc::new(InMemorySessionRepository::new());
        let engine = Arc::new(ProfilingEngine::new(ScoringParameters::default()));
        let id = seeded_session(&repo, &catalog, 12).await;

        let err = GetDeepInsightsHandler::new(catalog, engine, repo)
            .handle(GetDeepInsightsQuery {
                session_id: id,
                user_id: user(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProfilingError::NotCompleted(_)));
    }
}
