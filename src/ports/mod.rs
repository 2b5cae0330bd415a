//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Ports
//!
//! - `AIProvider` - Optional text-generation provider
//! - `NarrativeGenerator` - Persona narrative enrichment (never fails)
//! - `ProfilingSessionRepository` - Session persistence

mod ai_provider;
mod narrative_generator;
mod profiling_session_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, RequestMetadata, TokenUsage,
};
pub use narrative_generator::NarrativeGenerator;
pub use profiling_session_repository::ProfilingSessionRepository;
