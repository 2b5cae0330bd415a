//! Profiling session repository port.
//!
//! The persistence collaborator: load/save by session id plus a response
//! upsert keyed by (session id, question id). Schema is the adapter's concern.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::profiling::{ProfilingSession, Response};
use async_trait::async_trait;

/// Repository port for `ProfilingSession` persistence.
#[async_trait]
pub trait ProfilingSessionRepository: Send + Sync {
    /// Insert or replace a session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &ProfilingSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ProfilingSession>, DomainError>;

    /// Record one answer, replacing any earlier answer to the same question.
    ///
    /// Returns `true` if the question had not been answered before.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `SessionCompleted` if the session is locked
    async fn upsert_response(&self, id: &SessionId, response: Response) -> Result<bool, DomainError>;

    /// Check if a session exists.
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError>;
}
