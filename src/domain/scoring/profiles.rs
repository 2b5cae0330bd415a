//! Static per-track guidance: pattern blends, strengths, and learning paths.

use super::Pattern;
use crate::domain::catalog::{keys, TrackKey};

/// One pattern's share of a track's boost, with the sentence used when it is strong.
#[derive(Debug, Clone, Copy)]
pub struct PatternSignal {
    pub pattern: Pattern,
    pub weight: f64,
    pub reason: &'static str,
}

/// Reference guidance for one built-in track.
#[derive(Debug, Clone, Copy)]
pub struct TrackProfile {
    pub key: &'static str,
    /// Exactly three signals; weights sum to 1.0.
    pub signals: [PatternSignal; 3],
    pub strengths: &'static [&'static str],
    pub optimal_path: &'static str,
    pub generic_reason: &'static str,
    pub foundations: &'static [&'static str],
    pub complements: &'static [&'static str],
    pub trait_label: &'static str,
}

const fn signal(pattern: Pattern, weight: f64, reason: &'static str) -> PatternSignal {
    PatternSignal {
        pattern,
        weight,
        reason,
    }
}

static PROFILES: [TrackProfile; 5] = [
    TrackProfile {
        key: keys::DEFENDER,
        signals: [
            signal(Pattern::PatternRecognition, 0.4, "You spot patterns and anomalies quickly, the core skill of threat detection."),
            signal(Pattern::Stability, 0.3, "You value consistency, which suits disciplined security operations."),
            signal(Pattern::RiskSensitivity, 0.3, "You are alert to risk and threats, a strong instinct for defense."),
        ],
        strengths: &["Threat detection", "Calm incident response", "Attention to detail", "Protective mindset"],
        optimal_path: "Network security fundamentals → SIEM and log analysis → Incident response → Threat hunting",
        generic_reason: "Your answers lean toward protecting systems and responding to incidents.",
        foundations: &["Networking fundamentals", "Windows and Linux administration", "Log analysis", "Security monitoring basics"],
        complements: &["Offensive techniques to understand attackers", "GRC to connect defense to business risk"],
        trait_label: "Vigilant",
    },
    TrackProfile {
        key: keys::OFFENSIVE,
        signals: [
            signal(Pattern::Curiosity, 0.4, "Your curiosity about how things work drives effective exploitation research."),
            signal(Pattern::Exploration, 0.3, "You like to explore and investigate, the heart of reconnaissance."),
            signal(Pattern::AnalyticalLateralThinking, 0.3, "You approach problems from unexpected angles, as skilled attackers do."),
        ],
        strengths: &["Creative problem solving", "Persistence", "Technical curiosity", "Adversarial thinking"],
        optimal_path: "Linux and scripting → Web application security → Penetration testing → Red team operations",
        generic_reason: "Your answers show an attacker's mindset and a drive to find weaknesses.",
        foundations: &["Linux command line", "Networking and protocols", "Web application basics", "Scripting with Python or Bash"],
        complements: &["Defensive monitoring to see attacks from both sides", "Innovation to build your own tooling"],
        trait_label: "Curious",
    },
    TrackProfile {
        key: keys::GRC,
        signals: [
            signal(Pattern::DocumentationClarity, 0.4, "You communicate clearly in writing, essential for policy and audit work."),
            signal(Pattern::StructuredThinking, 0.3, "You think in structured steps, a natural fit for risk frameworks."),
            signal(Pattern::GovernanceAlignment, 0.3, "You are comfortable with policy and compliance, the backbone of governance."),
        ],
        strengths: &["Structured analysis", "Clear documentation", "Risk awareness", "Stakeholder communication"],
        optimal_path: "Security frameworks → Risk assessment → Audit and compliance → Security governance",
        generic_reason: "Your answers favour order, accountability, and managing risk.",
        foundations: &["Security frameworks (NIST, ISO 27001)", "Risk management basics", "Policy writing", "Audit fundamentals"],
        complements: &["Defender skills to ground controls in practice", "Leadership to drive programme change"],
        trait_label: "Principled",
    },
    TrackProfile {
        key: keys::INNOVATION,
        signals: [
            signal(Pattern::Creativity, 0.4, "Your creativity points toward building new security solutions."),
            signal(Pattern::AutomationInterest, 0.3, "You like automating work, a key skill for security engineering."),
            signal(Pattern::SystemsThinking, 0.3, "You think in systems, which helps design secure architectures."),
        ],
        strengths: &["Inventiveness", "Automation", "Systems design", "Rapid prototyping"],
        optimal_path: "Programming fundamentals → Security automation → Cloud and DevSecOps → Security research",
        generic_reason: "Your answers show a builder's mindset and interest in new approaches.",
        foundations: &["Programming in Python or Go", "Cloud platform basics", "CI/CD pipelines", "Secure software design"],
        complements: &["Offensive testing to validate what you build", "Defender operations to learn real-world needs"],
        trait_label: "Inventive",
    },
    TrackProfile {
        key: keys::LEADERSHIP,
        signals: [
            signal(Pattern::Communication, 0.4, "You explain ideas well and work through people, the base of leadership."),
            signal(Pattern::DecisionClarity, 0.3, "You make clear decisions and set priorities under pressure."),
            signal(Pattern::ValueDriven, 0.3, "You are driven by mission and values, which inspires teams."),
        ],
        strengths: &["Communication", "Decision making", "Team building", "Strategic thinking"],
        optimal_path: "Security fundamentals → Team lead → Security programme management → Security leadership",
        generic_reason: "Your answers show you want to guide teams and shape security strategy.",
        foundations: &["Security fundamentals across domains", "Project management", "Business communication", "Risk-based decision making"],
        complements: &["GRC to speak the language of the board", "Defender experience to earn technical credibility"],
        trait_label: "Influential",
    },
];

/// Strengths used for tracks without a profile.
pub const GENERIC_STRENGTHS: &[&str] = &["Adaptability", "Willingness to learn", "Broad curiosity"];

/// Foundations used for tracks without a profile.
pub const GENERIC_FOUNDATIONS: &[&str] = &[
    "Networking fundamentals",
    "Operating system basics",
    "Core security principles",
];

/// Looks up the profile of a built-in track.
pub fn profile_for(track: &TrackKey) -> Option<&'static TrackProfile> {
    PROFILES.iter().find(|p| p.key == track.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_blends_three_patterns_summing_to_one() {
        for profile in &PROFILES {
            let total: f64 = profile.signals.iter().map(|s| s.weight).sum();
            assert!((total - 1.0).abs() < 1e-9, "{}", profile.key);
        }
    }

    #[test]
    fn builtin_tracks_have_profiles() {
        for key in [keys::DEFENDER, keys::OFFENSIVE, keys::GRC, keys::INNOVATION, keys::LEADERSHIP] {
            assert!(profile_for(&TrackKey::new(key).unwrap()).is_some(), "{}", key);
        }
        assert!(profile_for(&TrackKey::new("forensics").unwrap()).is_none());
    }
}
