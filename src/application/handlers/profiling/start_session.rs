//! StartProfilingSessionHandler - Command handler for opening a profiling session.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, SessionId, UserId};
use crate::domain::profiling::{ProfilingError, ProfilingSession};
use crate::ports::ProfilingSessionRepository;

/// Command to start a new profiling session.
#[derive(Debug, Clone)]
pub struct StartProfilingSessionCommand {
    pub user_id: UserId,
}

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartProfilingSessionResult {
    pub session: ProfilingSession,
}

/// Handler for starting profiling sessions.
pub struct StartProfilingSessionHandler {
    repository: Arc<dyn ProfilingSessionRepository>,
}

impl StartProfilingSessionHandler {
    pub fn new(repository: Arc<dyn ProfilingSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: StartProfilingSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<StartProfilingSessionResult, ProfilingError> {
        let session = ProfilingSession::start(SessionId::new(), cmd.user_id);

        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            user_id = %session.user_id(),
            correlation_id = %metadata.correlation_id(),
            "profiling session started"
        );

        Ok(StartProfilingSessionResult { session })
    }
}
