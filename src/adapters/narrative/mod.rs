//! Narrative generator adapters.

mod llm_narrator;

pub use llm_narrator::LlmNarrativeGenerator;
