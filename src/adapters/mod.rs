//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text-generation providers (OpenAI-compatible, mock)
//! - `narrative` - Provider-backed persona narratives with fallback
//! - `storage` - Profiling session persistence

pub mod ai;
pub mod narrative;
pub mod storage;

pub use ai::{MockAIProvider, MockError, MockResponse, OpenAIConfig, OpenAIProvider};
pub use narrative::LlmNarrativeGenerator;
pub use storage::InMemorySessionRepository;
