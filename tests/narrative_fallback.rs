//! Integration tests for narrative generation.
//!
//! The fallback narrator must always produce a complete persona, and the
//! provider-backed narrator must degrade to it whenever the provider fails.

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;

use cyber_profiler::adapters::{LlmNarrativeGenerator, MockAIProvider, MockError};
use cyber_profiler::domain::catalog::{QuestionCatalog, TrackKey};
use cyber_profiler::domain::narrative::{
    template_keys, ActivitySummary, FallbackNarrator, NarrativeInsights, NarrativeSource,
    MAX_READINESS,
};
use cyber_profiler::ports::NarrativeGenerator;

fn track(key: &str) -> TrackKey {
    TrackKey::new(key).unwrap()
}

fn assert_complete(insights: &NarrativeInsights) {
    let persona = &insights.persona;
    assert!(!persona.name.is_empty());
    assert!(!persona.archetype.is_empty());
    assert!(!persona.career_vision.is_empty());
    assert!(!persona.projected_skills.is_empty());
    assert!(!persona.estimated_career_level.is_empty());
    assert!(!persona.predicted_roles.is_empty());
    assert!(!insights.narrative.is_empty());
    assert!(!insights.gap_analysis.is_empty());
    assert!(!insights.next_steps.is_empty());
    assert!((0.0..=MAX_READINESS).contains(&insights.readiness_percent));
}

#[test]
fn every_catalog_track_has_a_complete_fallback() {
    let catalog = QuestionCatalog::builtin();
    let keys: Vec<TrackKey> = catalog.track_keys().cloned().collect();
    assert_eq!(keys.len(), template_keys().count());

    for key in keys {
        let insights = FallbackNarrator.generate_fallback_insights(&ActivitySummary::starting(key));
        assert_complete(&insights);
        assert_eq!(insights.source, NarrativeSource::Fallback);
    }
}

#[test]
fn zero_activity_describes_just_starting() {
    for key in template_keys() {
        let insights = FallbackNarrator.generate_fallback_insights(&ActivitySummary::starting(track(key)));

        assert!(insights.narrative.contains("just starting"), "{}", insights.narrative);
        assert!(!insights.narrative.contains('%'));
        assert_eq!(insights.readiness_percent, 0.0);
        assert_eq!(insights.persona.estimated_career_level, "Aspiring");
    }
}

#[test]
fn unknown_track_still_gets_a_persona() {
    let insights = FallbackNarrator.generate_fallback_insights(&ActivitySummary {
        missions_completed: 2,
        hours_spent: 1.0,
        ..ActivitySummary::starting(track("cloud-security"))
    });
    assert_complete(&insights);
}

#[tokio::test]
async fn always_failing_provider_yields_fallback_for_every_track() {
    let errors = [
        MockError::AuthenticationFailed,
        MockError::RateLimited { retry_after_secs: 30 },
        MockError::Timeout { timeout_secs: 5 },
    ];

    for error in errors {
        let provider = MockAIProvider::failing(error);
        let generator = LlmNarrativeGenerator::new(Arc::new(provider.clone()), Duration::from_millis(200));

        for key in template_keys() {
            let activity = ActivitySummary {
                missions_completed: 5,
                average_score: 70.0,
                hours_spent: 8.0,
                progress_percent: 30.0,
                ..ActivitySummary::starting(track(key))
            };
            let insights = generator.generate(&activity).await;

            assert_eq!(insights, FallbackNarrator.generate_fallback_insights(&activity));
            assert_complete(&insights);
        }
        assert_eq!(provider.call_count(), template_keys().count());
    }
}

#[tokio::test]
async fn hung_provider_is_cut_off_by_timeout() {
    let provider = MockAIProvider::new().with_delay(Duration::from_secs(30));
    let generator = LlmNarrativeGenerator::new(Arc::new(provider), Duration::from_millis(50));

    let started = std::time::Instant::now();
    let insights = generator.generate(&ActivitySummary::starting(track("grc"))).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(insights.source, NarrativeSource::Fallback);
}

proptest! {
    #[test]
    fn readiness_stays_in_bounds(
        missions in 0u32..10_000,
        average in -50.0f64..500.0,
        hours in -10.0f64..10_000.0,
        progress in -50.0f64..500.0,
        key_index in 0usize..5,
    ) {
        let key = template_keys().nth(key_index).unwrap();
        let insights = FallbackNarrator.generate_fallback_insights(&ActivitySummary {
            track: track(key),
            display_name: None,
            missions_completed: missions,
            average_score: average,
            hours_spent: hours,
            progress_percent: progress,
        });
        prop_assert!((0.0..=MAX_READINESS).contains(&insights.readiness_percent));
    }
}
