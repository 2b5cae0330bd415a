//! Profiling-specific error types.

use thiserror::Error;

use crate::domain::catalog::{OptionCode, QuestionId};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Errors raised by profiling sessions and their handlers.
#[derive(Debug, Clone, Error)]
pub enum ProfilingError {
    #[error("Profiling session not found: {0}")]
    NotFound(SessionId),

    #[error("User is not authorized to access this profiling session")]
    Forbidden,

    #[error("Profiling session {0} is already completed")]
    AlreadyCompleted(SessionId),

    #[error("Profiling session {0} has not been completed yet")]
    NotCompleted(SessionId),

    #[error("Unknown question '{0}'")]
    UnknownQuestion(QuestionId),

    #[error("Question '{question}' has no option '{option}'")]
    UnknownOption {
        question: QuestionId,
        option: OptionCode,
    },

    #[error("{}", insufficient_message(.given, .required))]
    InsufficientResponses { given: usize, required: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

fn insufficient_message(given: &usize, required: &usize) -> String {
    let remaining = required.saturating_sub(*given);
    format!(
        "Answer {} more question{} to complete profiling ({} of {} required answered)",
        remaining,
        if remaining == 1 { "" } else { "s" },
        given,
        required
    )
}

impl ProfilingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfilingError::NotFound(_) => ErrorCode::SessionNotFound,
            ProfilingError::Forbidden => ErrorCode::Forbidden,
            ProfilingError::AlreadyCompleted(_) => ErrorCode::SessionCompleted,
            ProfilingError::NotCompleted(_) => ErrorCode::SessionNotCompleted,
            ProfilingError::UnknownQuestion(_) => ErrorCode::QuestionNotFound,
            ProfilingError::UnknownOption { .. } => ErrorCode::OptionNotFound,
            ProfilingError::InsufficientResponses { .. } => ErrorCode::InsufficientResponses,
            ProfilingError::Validation(_) => ErrorCode::ValidationFailed,
            ProfilingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Responses still needed before completion is allowed, if that is the problem.
    pub fn remaining_responses(&self) -> Option<usize> {
        match self {
            ProfilingError::InsufficientResponses { given, required } => {
                Some(required.saturating_sub(*given))
            }
            _ => None,
        }
    }
}

impl From<DomainError> for ProfilingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ProfilingError::Forbidden,
            _ => ProfilingError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ProfilingError> for DomainError {
    fn from(err: ProfilingError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
