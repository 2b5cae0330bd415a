//! SubmitReflectionHandler - Command handler for the free-text reflection.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, SessionId, UserId};
use crate::domain::profiling::{ProfilingError, Reflection};
use crate::ports::ProfilingSessionRepository;

use super::load_owned_session;

#[derive(Debug, Clone)]
pub struct SubmitReflectionCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub reflection: Reflection,
}

pub struct SubmitReflectionHandler {
    repository: Arc<dyn ProfilingSessionRepository>,
}

impl SubmitReflectionHandler {
    pub fn new(repository: Arc<dyn ProfilingSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitReflectionCommand,
        metadata: CommandMetadata,
    ) -> Result<(), ProfilingError> {
        let mut session =
            load_owned_session(self.repository.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        session.submit_reflection(cmd.reflection)?;
        self.repository.save(&session).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            correlation_id = %metadata.correlation_id(),
            "profiling reflection recorded"
        );

        Ok(())
    }
}
