//! Narrative module - Persona and career-readiness narratives.
//!
//! The deterministic `FallbackNarrator` is the default; provider-backed
//! narrators live behind the `NarrativeGenerator` port.

mod fallback;
mod templates;
mod types;

pub use fallback::{career_level, readiness, FallbackNarrator, MAX_READINESS};
pub use templates::{template_for, template_keys, NarrativeTemplate, GENERIC_TEMPLATE};
pub use types::{ActivitySummary, NarrativeInsights, NarrativeSource, Persona};
