//! Deterministic narrative built from activity arithmetic and the template table.

use super::templates::template_for;
use super::{ActivitySummary, NarrativeInsights, NarrativeSource, Persona};

/// Upper bound of the fallback readiness estimate.
pub const MAX_READINESS: f64 = 95.0;

/// Career readiness in [0, 95].
///
/// `missions * 3 + average_score * 0.2 + progress * 0.3 + min(hours * 2, 20)`
pub fn readiness(activity: &ActivitySummary) -> f64 {
    let hours_component = (activity.hours_spent.max(0.0) * 2.0).min(20.0);
    let raw = f64::from(activity.missions_completed) * 3.0
        + activity.average_score.max(0.0) * 0.2
        + activity.progress_percent.max(0.0) * 0.3
        + hours_component;
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, MAX_READINESS)
    }
}

pub fn career_level(readiness: f64) -> &'static str {
    if readiness < 25.0 {
        "Aspiring"
    } else if readiness < 50.0 {
        "Entry-level"
    } else if readiness < 75.0 {
        "Junior"
    } else {
        "Mid-level"
    }
}

/// Always succeeds; performs no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackNarrator;

impl FallbackNarrator {
    pub fn generate_fallback_insights(&self, activity: &ActivitySummary) -> NarrativeInsights {
        let template = template_for(&activity.track);
        let readiness_percent = readiness(activity);
        let level = career_level(readiness_percent);
        let first_role = template
            .predicted_roles
            .first()
            .copied()
            .unwrap_or("security");

        let narrative = if activity.is_just_starting() {
            format!(
                "You're just starting your journey toward becoming {}. {} Your first missions will set the pace.",
                article(template.archetype),
                template.career_vision
            )
        } else {
            format!(
                "After {} mission{} and {:.0} hour{} of practice with an average score of {:.0}%, you are {:.0}% ready for a {} {} role. {}",
                activity.missions_completed,
                plural(activity.missions_completed as f64),
                activity.hours_spent,
                plural(activity.hours_spent.round()),
                activity.average_score,
                readiness_percent,
                level.to_lowercase(),
                first_role,
                template.career_vision
            )
        };

        NarrativeInsights {
            persona: Persona {
                name: activity
                    .display_name
                    .clone()
                    .unwrap_or_else(|| "Future You".to_string()),
                archetype: template.archetype.to_string(),
                career_vision: template.career_vision.to_string(),
                projected_skills: to_strings(template.projected_skills),
                estimated_career_level: level.to_string(),
                predicted_roles: to_strings(template.predicted_roles),
            },
            readiness_percent,
            narrative,
            gap_analysis: to_strings(template.gap_analysis),
            next_steps: to_strings(template.next_steps),
            source: NarrativeSource::Fallback,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn plural(count: f64) -> &'static str {
    if count == 1.0 {
        ""
    } else {
        "s"
    }
}

/// "The Guardian" becomes "the Guardian"; anything else gets "a".
fn article(archetype: &str) -> String {
    if archetype.starts_with("The ") {
        archetype.replacen("The ", "the ", 1)
    } else {
        format!("a {}", archetype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::TrackKey;
    use crate::domain::narrative::templates::template_keys;

    fn activity(track: &str, missions: u32, avg: f64, hours: f64, progress: f64) -> ActivitySummary {
        ActivitySummary {
            track: TrackKey::new(track).unwrap(),
            display_name: None,
            missions_completed: missions,
            average_score: avg,
            hours_spent: hours,
            progress_percent: progress,
        }
    }

    #[test]
    fn readiness_formula() {
        // 4*3 + 80*0.2 + 40*0.3 + min(5*2, 20) = 12 + 16 + 12 + 10
        assert!((readiness(&activity("grc", 4, 80.0, 5.0, 40.0)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn readiness_caps_hours_and_total() {
        // hours contribute at most 20
        assert!((readiness(&activity("grc", 0, 0.0, 100.0, 0.0)) - 20.0).abs() < 1e-9);
        assert_eq!(readiness(&activity("grc", 50, 100.0, 100.0, 100.0)), 95.0);
    }

    #[test]
    fn career_level_buckets() {
        assert_eq!(career_level(0.0), "Aspiring");
        assert_eq!(career_level(24.9), "Aspiring");
        assert_eq!(career_level(25.0), "Entry-level");
        assert_eq!(career_level(60.0), "Junior");
        assert_eq!(career_level(95.0), "Mid-level");
    }

    #[test]
    fn every_template_produces_a_complete_persona() {
        for key in template_keys() {
            let insights = FallbackNarrator.generate_fallback_insights(&activity(key, 6, 70.0, 12.0, 30.0));
            let persona = &insights.persona;
            assert!(!persona.archetype.is_empty(), "{}", key);
            assert!(!persona.projected_skills.is_empty(), "{}", key);
            assert!(!persona.predicted_roles.is_empty(), "{}", key);
            assert!(!insights.gap_analysis.is_empty(), "{}", key);
            assert!(!insights.next_steps.is_empty(), "{}", key);
            assert_eq!(insights.source, NarrativeSource::Fallback);
        }
    }

    #[test]
    fn zero_activity_reads_as_just_starting() {
        let insights = FallbackNarrator.generate_fallback_insights(&activity("defender", 0, 0.0, 0.0, 0.0));
        assert!(insights.narrative.contains("just starting"));
        assert!(!insights.narrative.contains('%'));
        assert_eq!(insights.readiness_percent, 0.0);
        assert_eq!(insights.persona.estimated_career_level, "Aspiring");
    }

    #[test]
    fn active_learner_gets_numeric_breakdown() {
        let insights = FallbackNarrator.generate_fallback_insights(&activity("offensive", 1, 90.0, 3.0, 10.0));
        assert!(insights
            .narrative
            .starts_with("After 1 mission and 3 hours of practice with an average score of 90%"));
    }

    #[test]
    fn unknown_track_uses_generic_template() {
        let insights = FallbackNarrator.generate_fallback_insights(&activity("forensics", 0, 0.0, 0.0, 0.0));
        assert_eq!(insights.persona.archetype, "The Explorer");
    }

    #[test]
    fn display_name_flows_into_persona() {
        let mut summary = activity("leadership", 2, 50.0, 4.0, 10.0);
        summary.display_name = Some("Ada".to_string());
        let insights = FallbackNarrator.generate_fallback_insights(&summary);
        assert_eq!(insights.persona.name, "Ada");
    }
}
