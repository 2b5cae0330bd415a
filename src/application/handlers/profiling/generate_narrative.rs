//! GenerateNarrativeHandler - Builds the "Future-You" persona for a completed session.
//!
//! Never fails on provider problems: the generator port absorbs them. Only
//! session lookup and ownership can fail.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, SessionId, UserId};
use crate::domain::narrative::{ActivitySummary, NarrativeInsights};
use crate::domain::profiling::ProfilingError;
use crate::ports::{NarrativeGenerator, ProfilingSessionRepository};

use super::load_owned_session;

#[derive(Debug, Clone)]
pub struct GenerateNarrativeCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Learner activity; when absent, a zero-activity summary on the
    /// session's primary track is used.
    pub activity: Option<ActivitySummary>,
}

pub struct GenerateNarrativeHandler {
    repository: Arc<dyn ProfilingSessionRepository>,
    generator: Arc<dyn NarrativeGenerator>,
}

impl GenerateNarrativeHandler {
    pub fn new(
        repository: Arc<dyn ProfilingSessionRepository>,
        generator: Arc<dyn NarrativeGenerator>,
    ) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// # Errors
    ///
    /// - `NotCompleted` if the session has no primary track yet
    pub async fn handle(
        &self,
        cmd: GenerateNarrativeCommand,
        metadata: CommandMetadata,
    ) -> Result<NarrativeInsights, ProfilingError> {
        let session =
            load_owned_session(self.repository.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        let primary_track = session
            .primary_track()
            .cloned()
            .ok_or(ProfilingError::NotCompleted(cmd.session_id))?;
        let activity = cmd
            .activity
            .unwrap_or_else(|| ActivitySummary::starting(primary_track));

        let insights = self.generator.generate(&activity).await;

        tracing::info!(
            session_id = %cmd.session_id,
            track = %activity.track,
            source = ?insights.source,
            readiness = insights.readiness_percent,
            correlation_id = %metadata.correlation_id(),
            "narrative generated"
        );

        Ok(insights)
    }
}
