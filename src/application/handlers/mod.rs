//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profiling;

pub use profiling::{
    CompleteProfilingSessionCommand, CompleteProfilingSessionHandler,
    CompleteProfilingSessionResult, GenerateNarrativeCommand, GenerateNarrativeHandler,
    GetDeepInsightsHandler, GetDeepInsightsQuery, StartProfilingSessionCommand,
    StartProfilingSessionHandler, StartProfilingSessionResult, SubmitReflectionCommand,
    SubmitReflectionHandler, SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult,
};
