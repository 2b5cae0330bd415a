//! Narrative generator port.
//!
//! Turns an activity summary into a persona narrative. Implementations must
//! not fail: provider problems are absorbed by falling back to the
//! deterministic narrator, so the return type carries no error.

use async_trait::async_trait;

use crate::domain::narrative::{ActivitySummary, FallbackNarrator, NarrativeInsights};

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, activity: &ActivitySummary) -> NarrativeInsights;
}

/// The deterministic narrator needs no provider.
#[async_trait]
impl NarrativeGenerator for FallbackNarrator {
    async fn generate(&self, activity: &ActivitySummary) -> NarrativeInsights {
        self.generate_fallback_insights(activity)
    }
}
