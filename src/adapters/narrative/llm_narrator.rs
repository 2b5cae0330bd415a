//! LLM-backed narrative generator.
//!
//! Asks the provider for a persona JSON object and merges it with the
//! deterministic readiness, gap analysis and next steps. Any failure (error,
//! timeout, non-JSON reply, missing field) falls back to `FallbackNarrator`.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::narrative::{ActivitySummary, FallbackNarrator, NarrativeInsights, NarrativeSource, Persona};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, NarrativeGenerator, RequestMetadata,
};

const SYSTEM_PROMPT: &str = "You are a cybersecurity career coach. Reply with a single JSON object \
and nothing else. Required keys: name, archetype, career_vision, projected_skills (array of \
strings), estimated_career_level, predicted_roles (array of strings). Optional key: narrative.";

const MAX_TOKENS: u32 = 600;

/// Why the provider persona could not be used.
#[derive(Debug, thiserror::Error)]
enum NarrativeError {
    #[error("provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider failed: {0}")]
    Provider(#[from] AIError),

    #[error("no JSON object in reply")]
    NoJson,

    #[error("malformed persona: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("empty field: {0}")]
    EmptyField(&'static str),
}

/// Persona as returned by the provider. Every persona field is required.
#[derive(Debug, Deserialize)]
struct ProviderPersona {
    name: String,
    archetype: String,
    career_vision: String,
    projected_skills: Vec<String>,
    estimated_career_level: String,
    predicted_roles: Vec<String>,
    #[serde(default)]
    narrative: Option<String>,
}

pub struct LlmNarrativeGenerator {
    provider: Arc<dyn AIProvider>,
    timeout: Duration,
    fallback: FallbackNarrator,
}

impl LlmNarrativeGenerator {
    pub fn new(provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            fallback: FallbackNarrator,
        }
    }

    fn build_request(&self, activity: &ActivitySummary) -> CompletionRequest {
        let prompt = format!(
            "Track: {}\nMissions completed: {}\nAverage score: {:.0}%\nHours spent: {:.1}\nCurriculum progress: {:.0}%\nLearner name: {}\n\nDescribe who this learner is becoming.",
            activity.track,
            activity.missions_completed,
            activity.average_score,
            activity.hours_spent,
            activity.progress_percent,
            activity.display_name.as_deref().unwrap_or("unknown"),
        );

        CompletionRequest::new(RequestMetadata::new(format!("narrative-{}", uuid::Uuid::new_v4())))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(0.7)
    }

    async fn try_generate(
        &self,
        activity: &ActivitySummary,
    ) -> Result<NarrativeInsights, NarrativeError> {
        let request = self.build_request(activity);
        let response = tokio::time::timeout(self.timeout, self.provider.complete(request))
            .await
            .map_err(|_| NarrativeError::Timeout(self.timeout))??;
        tracing::debug!(
            model = %response.model,
            tokens = response.usage.total_tokens,
            "narrative completion received"
        );

        let persona = parse_persona(&response.content)?;
        let base = self.fallback.generate_fallback_insights(activity);

        Ok(NarrativeInsights {
            narrative: persona
                .narrative
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(base.narrative),
            persona: Persona {
                name: persona.name,
                archetype: persona.archetype,
                career_vision: persona.career_vision,
                projected_skills: persona.projected_skills,
                estimated_career_level: persona.estimated_career_level,
                predicted_roles: persona.predicted_roles,
            },
            readiness_percent: base.readiness_percent,
            gap_analysis: base.gap_analysis,
            next_steps: base.next_steps,
            source: NarrativeSource::Provider,
        })
    }
}

#[async_trait]
impl NarrativeGenerator for LlmNarrativeGenerator {
    async fn generate(&self, activity: &ActivitySummary) -> NarrativeInsights {
        match self.try_generate(activity).await {
            Ok(insights) => insights,
            Err(error) => {
                tracing::warn!(track = %activity.track, %error, "narrative provider unavailable, using fallback");
                self.fallback.generate_fallback_insights(activity)
            }
        }
    }
}

/// Pulls the outermost `{...}` out of a reply, ignoring ``` fences or chatter.
fn extract_json(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

fn parse_persona(content: &str) -> Result<ProviderPersona, NarrativeError> {
    let json = extract_json(content).ok_or(NarrativeError::NoJson)?;
    let persona: ProviderPersona = serde_json::from_str(json)?;

    let required = [
        ("name", persona.name.as_str()),
        ("archetype", persona.archetype.as_str()),
        ("career_vision", persona.career_vision.as_str()),
        ("estimated_career_level", persona.estimated_career_level.as_str()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(NarrativeError::EmptyField(*field));
    }
    if persona.projected_skills.is_empty() {
        return Err(NarrativeError::EmptyField("projected_skills"));
    }
    if persona.predicted_roles.is_empty() {
        return Err(NarrativeError::EmptyField("predicted_roles"));
    }

    Ok(persona)
}
