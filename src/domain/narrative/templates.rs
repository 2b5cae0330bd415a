//! Track-keyed narrative templates for the deterministic fallback.

use crate::domain::catalog::{keys, TrackKey};

#[derive(Debug, Clone, Copy)]
pub struct NarrativeTemplate {
    pub key: &'static str,
    pub archetype: &'static str,
    pub career_vision: &'static str,
    pub projected_skills: &'static [&'static str],
    pub predicted_roles: &'static [&'static str],
    pub gap_analysis: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

static TEMPLATES: [NarrativeTemplate; 5] = [
    NarrativeTemplate {
        key: keys::DEFENDER,
        archetype: "The Guardian",
        career_vision: "Leading incident response for an organisation that counts on you when it matters most.",
        projected_skills: &["Threat detection", "Incident response", "SIEM engineering", "Digital forensics"],
        predicted_roles: &["SOC Analyst", "Incident Responder", "Threat Hunter"],
        gap_analysis: &["Hands-on experience with a SIEM", "Practice triaging real alerts", "Deeper packet analysis"],
        next_steps: &["Complete the log analysis mission series", "Build a home lab with a SIEM", "Join a blue-team CTF"],
    },
    NarrativeTemplate {
        key: keys::OFFENSIVE,
        archetype: "The Infiltrator",
        career_vision: "Running red-team engagements that show organisations where they are truly exposed.",
        projected_skills: &["Penetration testing", "Exploit development", "Web application testing", "Social engineering"],
        predicted_roles: &["Penetration Tester", "Red Team Operator", "Vulnerability Researcher"],
        gap_analysis: &["Scripting fluency for custom tooling", "Web exploitation depth", "Report writing for clients"],
        next_steps: &["Finish the web exploitation missions", "Solve two CTF boxes a week", "Write up one finding end to end"],
    },
    NarrativeTemplate {
        key: keys::GRC,
        archetype: "The Architect of Trust",
        career_vision: "Shaping how an organisation measures and manages its security risk.",
        projected_skills: &["Risk assessment", "Control frameworks", "Audit", "Policy writing"],
        predicted_roles: &["GRC Analyst", "IT Auditor", "Risk Manager"],
        gap_analysis: &["Working knowledge of NIST and ISO 27001", "Experience running a risk assessment", "Technical grounding in common controls"],
        next_steps: &["Map a sample company to a control framework", "Complete the risk assessment missions", "Draft an acceptable-use policy"],
    },
    NarrativeTemplate {
        key: keys::INNOVATION,
        archetype: "The Builder",
        career_vision: "Designing the tools and automation that make security teams faster.",
        projected_skills: &["Security automation", "Cloud security", "Secure software design", "Detection engineering"],
        predicted_roles: &["Security Automation Engineer", "DevSecOps Engineer", "Product Security Engineer"],
        gap_analysis: &["Production-quality programming", "Cloud platform security", "CI/CD pipeline hardening"],
        next_steps: &["Automate one repetitive security task", "Complete the cloud security missions", "Publish a small open-source tool"],
    },
    NarrativeTemplate {
        key: keys::LEADERSHIP,
        archetype: "The Strategist",
        career_vision: "Leading a security programme and the people who run it.",
        projected_skills: &["Team leadership", "Security strategy", "Stakeholder communication", "Programme management"],
        predicted_roles: &["Security Team Lead", "Security Program Manager", "CISO"],
        gap_analysis: &["Breadth across security domains", "Experience leading a project", "Budget and risk communication"],
        next_steps: &["Lead a group mission", "Complete the security strategy missions", "Present a risk briefing to peers"],
    },
];

/// Template for tracks without a dedicated entry.
pub static GENERIC_TEMPLATE: NarrativeTemplate = NarrativeTemplate {
    key: "generic",
    archetype: "The Explorer",
    career_vision: "Finding your place in cybersecurity by building broad, solid foundations.",
    projected_skills: &["Security fundamentals", "Networking", "Problem solving"],
    predicted_roles: &["Security Analyst", "IT Security Specialist"],
    gap_analysis: &["Core networking knowledge", "Operating system fundamentals", "A first specialisation"],
    next_steps: &["Complete the foundations missions", "Try one mission from each track", "Set a weekly study goal"],
};

pub fn template_for(track: &TrackKey) -> &'static NarrativeTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.key == track.as_str())
        .unwrap_or(&GENERIC_TEMPLATE)
}

/// Keys with a dedicated template.
pub fn template_keys() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.key)
}
