//! CompleteProfilingSessionHandler - Command handler that scores and locks a session.

use std::sync::Arc;

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{CommandMetadata, SessionId, UserId};
use crate::domain::profiling::{ProfilingError, ProfilingSession};
use crate::domain::scoring::{ProfilingEngine, ProfilingResult};
use crate::ports::ProfilingSessionRepository;

use super::load_owned_session;

#[derive(Debug, Clone)]
pub struct CompleteProfilingSessionCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct CompleteProfilingSessionResult {
    pub session: ProfilingSession,
    pub result: ProfilingResult,
}

pub struct CompleteProfilingSessionHandler {
    catalog: Arc<QuestionCatalog>,
    engine: Arc<ProfilingEngine>,
    repository: Arc<dyn ProfilingSessionRepository>,
}

impl CompleteProfilingSessionHandler {
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

    /// # Errors
    ///
    /// - `InsufficientResponses` when too few answers resolve; nothing is saved
    /// - `AlreadyCompleted` when the session was completed before
    pub async fn handle(
        &self,
        cmd: CompleteProfilingSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteProfilingSessionResult, ProfilingError> {
        let mut session =
            load_owned_session(self.repository.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        let result = match session.complete(&self.catalog, &self.engine) {
            Ok(result) => result,
            Err(err) => {
                tracing::info!(
                    session_id = %cmd.session_id,
                    error = %err,
                    "profiling session not completed"
                );
                return Err(err);
            }
        };

        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            primary_track = result.primary_track.as_ref().map(|t| t.as_str()).unwrap_or("none"),
            responses = session.responses().len(),
            correlation_id = %metadata.correlation_id(),
            "profiling session completed"
        );

        Ok(CompleteProfilingSessionResult { session, result })
    }
}
