//! SubmitResponseHandler - Command handler for answering one question.
//!
//! The answer is validated against the catalog on the loaded session, then
//! persisted through the repository's upsert so a re-answer replaces the
//! earlier one.

use std::sync::Arc;

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{CommandMetadata, SessionId, UserId};
use crate::domain::profiling::{ProfilingError, Progress, Response};
use crate::domain::scoring::ProfilingEngine;
use crate::ports::ProfilingSessionRepository;

use super::load_owned_session;

/// Command to record an answer.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub response: Response,
}

#[derive(Debug, Clone)]
pub struct SubmitResponseResult {
    /// False when an earlier answer to the same question was replaced.
    pub is_new: bool,
    pub progress: Progress,
}

pub struct SubmitResponseHandler {
    catalog: Arc<QuestionCatalog>,
    engine: Arc<ProfilingEngine>,
    repository: Arc<dyn ProfilingSessionRepository>,
}

impl SubmitResponseHandler {
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

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitResponseResult, ProfilingError> {
        let mut session =
            load_owned_session(self.repository.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        session.submit_response(&self.catalog, cmd.response.clone())?;
        let is_new = self
            .repository
            .upsert_response(&cmd.session_id, cmd.response.clone())
            .await?;

        let progress = session.progress(&self.catalog, self.engine.parameters().min_responses);

        tracing::debug!(
            session_id = %cmd.session_id,
            question_id = %cmd.response.question_id,
            is_new,
            answered = progress.answered,
            correlation_id = %metadata.correlation_id(),
            "profiling response recorded"
        );

        Ok(SubmitResponseResult { is_new, progress })
    }
}
