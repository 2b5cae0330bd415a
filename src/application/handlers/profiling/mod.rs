//! Profiling command and query handlers.

mod complete_session;
mod generate_narrative;
mod get_deep_insights;
mod start_session;
mod submit_reflection;
mod submit_response;

pub use complete_session::{
    CompleteProfilingSessionCommand, CompleteProfilingSessionHandler,
    CompleteProfilingSessionResult,
};
pub use generate_narrative::{GenerateNarrativeCommand, GenerateNarrativeHandler};
pub use get_deep_insights::{GetDeepInsightsHandler, GetDeepInsightsQuery};
pub use start_session::{
    StartProfilingSessionCommand, StartProfilingSessionHandler, StartProfilingSessionResult,
};
pub use submit_reflection::{SubmitReflectionCommand, SubmitReflectionHandler};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult};

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::profiling::{ProfilingError, ProfilingSession};
use crate::ports::ProfilingSessionRepository;

/// Loads a session and checks that `user_id` owns it.
async fn load_owned_session(
    repository: &dyn ProfilingSessionRepository,
    session_id: &SessionId,
    user_id: &UserId,
) -> Result<ProfilingSession, ProfilingError> {
    let session = repository
        .find_by_id(session_id)
        .await?
        .ok_or(ProfilingError::NotFound(*session_id))?;
    session.authorize(user_id)?;
    Ok(session)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::storage::InMemorySessionRepository;
    use crate::domain::catalog::QuestionCatalog;
    use crate::domain::foundation::{CommandMetadata, SessionId, UserId};
    use crate::domain::profiling::{ProfilingSession, Response};
    use crate::ports::ProfilingSessionRepository;

    pub fn user() -> UserId {
        UserId::new("learner-1").unwrap()
    }

    pub fn metadata() -> CommandMetadata {
        CommandMetadata::new(user()).with_correlation_id("test-correlation")
    }

    /// First option of each of the first `count` catalog questions.
    pub fn first_answers(catalog: &QuestionCatalog, count: usize) -> Vec<Response> {
        catalog
            .questions()
            .iter()
            .take(count)
            .map(|q| Response::new(q.id.clone(), q.options[0].code.clone()))
            .collect()
    }

    /// Stores a fresh session with `count` answers already recorded.
    pub async fn seeded_session(
        repo: &Arc<InMemorySessionRepository>,
        catalog: &QuestionCatalog,
        count: usize,
    ) -> SessionId {
        let mut session = ProfilingSession::start(SessionId::new(), user());
        for response in first_answers(catalog, count) {
            session.submit_response(catalog, response).unwrap();
        }
        repo.save(&session).await.unwrap();
        *session.id()
    }
}
