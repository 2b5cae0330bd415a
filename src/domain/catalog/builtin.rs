//! Built-in catalog: five career tracks and three questions per category.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::track::keys::{DEFENDER, GRC, INNOVATION, LEADERSHIP, OFFENSIVE};
use super::{
    Category, OptionCode, Question, QuestionCatalog, QuestionId, QuestionOption, Track, TrackKey,
};

type OptionSpec = (&'static str, &'static str, &'static [(&'static str, f64)]);

static BUILTIN: Lazy<Arc<QuestionCatalog>> =
    Lazy::new(|| Arc::new(QuestionCatalog::assemble(tracks(), questions())));

impl QuestionCatalog {
    /// The catalog shipped with the engine, shared process-wide.
    pub fn builtin() -> Arc<QuestionCatalog> {
        Arc::clone(&BUILTIN)
    }
}

fn track(key: &'static str, name: &str, description: &str, paths: &[&str]) -> Track {
    Track::new(
        TrackKey::from_static(key),
        name,
        description,
        paths.iter().map(|p| p.to_string()).collect(),
    )
}

fn tracks() -> Vec<Track> {
    vec![
        track(
            DEFENDER,
            "Defender",
            "Blue-team operations: detection, incident response, and hardening.",
            &["SOC Analyst", "Incident Responder", "Threat Hunter", "Security Engineer"],
        ),
        track(
            OFFENSIVE,
            "Offensive",
            "Red-team work: penetration testing, exploitation, and adversary emulation.",
            &["Penetration Tester", "Red Team Operator", "Vulnerability Researcher", "Bug Bounty Hunter"],
        ),
        track(
            GRC,
            "Governance, Risk & Compliance",
            "Policy, audit, and risk management that keep security accountable.",
            &["GRC Analyst", "IT Auditor", "Risk Manager", "Compliance Officer"],
        ),
        track(
            INNOVATION,
            "Innovation",
            "Security engineering, automation, and building the next generation of tools.",
            &["Security Automation Engineer", "DevSecOps Engineer", "Security Researcher", "Product Security Engineer"],
        ),
        track(
            LEADERSHIP,
            "Leadership",
            "Leading teams and programs, from security manager to CISO.",
            &["Security Team Lead", "Security Program Manager", "Security Architect", "CISO"],
        ),
    ]
}

fn question(id: &'static str, category: Category, prompt: &str, options: &[OptionSpec]) -> Question {
    let options = options
        .iter()
        .map(|(code, text, scores)| {
            scores.iter().fold(
                QuestionOption::new(OptionCode::from_static(code), *text),
                |opt, (track, score)| opt.with_score(TrackKey::from_static(track), *score),
            )
        })
        .collect();
    Question::new(QuestionId::from_static(id), prompt, category, options)
}

fn questions() -> Vec<Question> {
    use Category::*;

    vec![
        // Identity & values
        question("iv-1", IdentityValue, "What value do you most want your security work to protect?", &[
            ("A", "Keeping people and organisations safe from attackers", &[(DEFENDER, 3.0), (LEADERSHIP, 1.0)]),
            ("B", "Proving systems can be broken before criminals find out", &[(OFFENSIVE, 3.0)]),
            ("C", "Making sure organisations follow the rules that keep data safe", &[(GRC, 3.0)]),
            ("D", "Building new tools that change how security is done", &[(INNOVATION, 3.0)]),
            ("E", "Guiding a team toward a shared goal", &[(LEADERSHIP, 3.0)]),
        ]),
        question("iv-2", IdentityValue, "Which mission statement feels most like you?", &[
            ("A", "I stand between threats and the people they target", &[(DEFENDER, 3.0)]),
            ("B", "I think like the adversary so others don't have to", &[(OFFENSIVE, 3.0)]),
            ("C", "I bring order and accountability to security", &[(GRC, 3.0), (LEADERSHIP, 1.0)]),
            ("D", "I invent what comes next", &[(INNOVATION, 3.0)]),
            ("E", "I'm not sure yet", &[]),
        ]),
        question("iv-3", IdentityValue, "When you explain your career goals to a friend, what do you emphasise?", &[
            ("A", "Being the person everyone relies on during an incident", &[(DEFENDER, 2.0), (LEADERSHIP, 2.0)]),
            ("B", "Leading people and setting direction", &[(LEADERSHIP, 3.0)]),
            ("C", "Deep technical mastery of attack techniques", &[(OFFENSIVE, 3.0)]),
            ("D", "Shaping how organisations make risk decisions", &[(GRC, 3.0)]),
            ("E", "Creating something nobody has built before", &[(INNOVATION, 3.0)]),
        ]),
        // Cyber aptitude
        question("ca-1", CyberAptitude, "You notice a recurring pattern in login failures across several accounts. What do you do first?", &[
            ("A", "Correlate the logs to pin down the attack", &[(DEFENDER, 3.0)]),
            ("B", "Check whether the failures match a known threat signature", &[(DEFENDER, 2.0), (GRC, 1.0)]),
            ("C", "Try to reproduce the attack to see how far it gets", &[(OFFENSIVE, 3.0)]),
            ("D", "Write something that detects it automatically next time", &[(INNOVATION, 3.0)]),
        ]),
        question("ca-2", CyberAptitude, "A puzzle-like problem has no obvious solution. How do you approach it?", &[
            ("A", "Break it into parts and work through them in order", &[(GRC, 2.0), (DEFENDER, 1.0)]),
            ("B", "Attack it from an unexpected angle", &[(OFFENSIVE, 3.0)]),
            ("C", "Try unusual ideas until one sticks", &[(INNOVATION, 3.0)]),
            ("D", "Get the group brainstorming together", &[(LEADERSHIP, 3.0)]),
        ]),
        question("ca-3", CyberAptitude, "How curious are you about how systems work under the hood?", &[
            ("A", "Very - I take things apart to understand them", &[(OFFENSIVE, 3.0)]),
            ("B", "I like understanding how all the pieces fit together", &[(INNOVATION, 2.0), (DEFENDER, 1.0)]),
            ("C", "Enough to secure them properly", &[(DEFENDER, 2.0), (GRC, 1.0)]),
            ("D", "I'd rather understand the people using them", &[(LEADERSHIP, 3.0)]),
        ]),
        // Technical exposure
        question("te-1", TechnicalExposure, "Which tools have you used hands-on?", &[
            ("A", "Packet sniffers, SIEMs and endpoint agents", &[(DEFENDER, 3.0)]),
            ("B", "Scanners, exploit frameworks and proxies", &[(OFFENSIVE, 3.0)]),
            ("C", "Spreadsheets, audit checklists and templates", &[(GRC, 3.0)]),
            ("D", "Programming languages and CI pipelines", &[(INNOVATION, 3.0)]),
            ("E", "None yet", &[]),
        ]),
        question("te-2", TechnicalExposure, "Have you ever written a script to automate a repetitive task?", &[
            ("A", "Yes, regularly", &[(INNOVATION, 3.0), (OFFENSIVE, 1.0)]),
            ("B", "A few times", &[(INNOVATION, 2.0), (DEFENDER, 1.0)]),
            ("C", "No, but I'd like to learn", &[(GRC, 1.0), (LEADERSHIP, 1.0)]),
            ("D", "No, I prefer working with people", &[(LEADERSHIP, 2.0), (GRC, 1.0)]),
        ]),
        question("te-3", TechnicalExposure, "How comfortable are you configuring a home network or lab?", &[
            ("A", "I run my own lab", &[(OFFENSIVE, 2.0), (DEFENDER, 2.0)]),
            ("B", "I've set up the basics", &[(DEFENDER, 2.0)]),
            ("C", "I understand the concepts but haven't built one", &[(GRC, 2.0)]),
            ("D", "Not at all", &[(LEADERSHIP, 1.0)]),
        ]),
        // Scenario preference
        question("sp-1", ScenarioPreference, "A ransomware threat hits your organisation at 2am. Which role do you want?", &[
            ("A", "Containing the spread and restoring service", &[(DEFENDER, 3.0)]),
            ("B", "Hunting for how the attackers got in", &[(DEFENDER, 2.0), (OFFENSIVE, 1.0)]),
            ("C", "Briefing executives and coordinating the response", &[(LEADERSHIP, 3.0)]),
            ("D", "Reviewing which controls failed", &[(GRC, 3.0)]),
        ]),
        question("sp-2", ScenarioPreference, "You're asked to explore a new application before launch. What excites you most?", &[
            ("A", "Hardening its configuration", &[(DEFENDER, 2.0)]),
            ("B", "Finding ways to break it", &[(OFFENSIVE, 3.0)]),
            ("C", "Prototyping a better security feature for it", &[(INNOVATION, 3.0)]),
            ("D", "Checking it meets regulatory requirements", &[(GRC, 3.0)]),
        ]),
        question("sp-3", ScenarioPreference, "Your team must decide how to handle a disclosed vulnerability. What do you prioritise?", &[
            ("A", "A clear, fast remediation timeline", &[(LEADERSHIP, 2.0), (DEFENDER, 1.0)]),
            ("B", "The business impact and who needs to know", &[(GRC, 2.0), (LEADERSHIP, 1.0)]),
            ("C", "A proof of concept to confirm impact", &[(OFFENSIVE, 3.0)]),
            ("D", "Detection so it never surprises us again", &[(DEFENDER, 2.0), (INNOVATION, 1.0)]),
        ]),
        // Work style
        question("ws-1", WorkStyle, "How do you prefer to work on a team?", &[
            ("A", "Collaborating closely and sharing ideas", &[(LEADERSHIP, 2.0), (GRC, 1.0)]),
            ("B", "Pairing with one or two trusted colleagues", &[(DEFENDER, 2.0)]),
            ("C", "Working independently, then sharing results", &[(OFFENSIVE, 2.0), (INNOVATION, 1.0)]),
            ("D", "Alone, deep in focus", &[(OFFENSIVE, 1.0), (INNOVATION, 2.0)]),
        ]),
        question("ws-2", WorkStyle, "How do you feel about documenting your work and following policy?", &[
            ("A", "I enjoy producing clear, complete records", &[(GRC, 3.0)]),
            ("B", "It's part of the job and I do it well", &[(GRC, 1.0), (DEFENDER, 2.0)]),
            ("C", "I do the minimum", &[(OFFENSIVE, 2.0)]),
            ("D", "I'd rather build something that does it for me", &[(INNOVATION, 3.0)]),
        ]),
        question("ws-3", WorkStyle, "Do you prefer a stable routine or constant change?", &[
            ("A", "A stable routine with clear procedures", &[(DEFENDER, 2.0), (GRC, 2.0)]),
            ("B", "Mostly routine with occasional surprises", &[(DEFENDER, 3.0)]),
            ("C", "Constant change keeps me sharp", &[(OFFENSIVE, 2.0), (INNOVATION, 1.0)]),
            ("D", "I want to be the one creating the change", &[(INNOVATION, 2.0), (LEADERSHIP, 1.0)]),
        ]),
        // Difficulty self-selection
        question("ds-1", DifficultySelection, "Which starting challenge sounds right for you?", &[
            ("A", "Guided fundamentals with lots of support", &[(GRC, 1.0)]),
            ("B", "Hands-on labs with hints when I'm stuck", &[(DEFENDER, 1.0)]),
            ("C", "Capture-the-flag challenges with no hints", &[(OFFENSIVE, 1.0)]),
            ("D", "Real-world projects from day one", &[(INNOVATION, 1.0)]),
        ]),
        question("ds-2", DifficultySelection, "How much structure do you want from a learning plan?", &[
            ("A", "A detailed, fixed sequence of lessons", &[(GRC, 1.0)]),
            ("B", "A clear outline with room to wander", &[(DEFENDER, 1.0)]),
            ("C", "Just the goal; I'll find my way", &[(OFFENSIVE, 1.0)]),
            ("D", "Freedom to set my own goals and lead others", &[(LEADERSHIP, 1.0)]),
        ]),
        question("ds-3", DifficultySelection, "How creative do you want your first projects to be?", &[
            ("A", "Follow proven labs exactly", &[(DEFENDER, 1.0)]),
            ("B", "Tweak labs with my own ideas", &[(OFFENSIVE, 1.0)]),
            ("C", "Design my own challenge from scratch", &[(INNOVATION, 1.0)]),
            ("D", "Organise a group project", &[(LEADERSHIP, 1.0)]),
        ]),
    ]
}
