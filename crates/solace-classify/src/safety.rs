//! Crisis Gate: the first check on every user message.
//!
//! When a crisis signal is detected the normal pipeline is bypassed and
//! the fixed emergency-resources message is returned instead. Detection
//! is deterministic and side-effect-free: a fixed ordered pattern list,
//! case-insensitive, first match wins, no scoring.

use regex::Regex;

/// Patterns indicating self-harm or suicidal ideation, common
/// misspellings included. Order matters only for which pattern reports
/// the match; any hit fires the gate.
const CRISIS_PATTERNS: [&str; 11] = [
    r"suicid(e|al|ally)?",
    r"sucid(e|al)?",
    r"\bkill myself\b",
    r"\bend (my|this) life\b",
    r"\bwant to die\b",
    r"\bnot worth living\b",
    r"\bself[- ]harm\b",
    r"\bcut(ting)? myself\b",
    r"\bhurt(ing)? myself\b",
    r"\bno reason to live\b",
    r"\bdon'?t want to be here\b",
];

/// The fixed emergency-resources reply. Returned verbatim whenever the
/// gate fires; always supersedes generated content.
pub const EMERGENCY_RESPONSE: &str = "\
**I'm very concerned about what you've shared.**

You're not alone, and help is available right now.

**Please reach out to a crisis helpline immediately:**

India:
- iCall: **9152987821** (Mon-Sat, 8am-10pm)
- Vandrevala Foundation: **1860-2662-345** (24/7)
- AASRA: **9820466627** (24/7)

International:
- International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/
- Crisis Text Line: Text **HELLO** to **741741** (USA)

---

Your life matters. Please talk to someone who can help you right now.";

/// Outcome of the gate check.
#[derive(Debug, Clone)]
pub struct GateResult {
    pub is_crisis: bool,
    /// The emergency message when `is_crisis` is true.
    pub canned_response: Option<&'static str>,
}

/// Pattern-based crisis detector. Compile once, evaluate synchronously
/// on every message before anything else runs.
pub struct CrisisGate {
    patterns: Vec<Regex>,
}

impl CrisisGate {
    pub fn new() -> Self {
        let patterns = CRISIS_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(&format!("(?i){p}")).ok())
            .collect();
        Self { patterns }
    }

    /// Check a message for crisis signals. First match wins.
    pub fn evaluate(&self, text: &str) -> GateResult {
        for pattern in &self.patterns {
            if pattern.is_match(text) {
                return GateResult {
                    is_crisis: true,
                    canned_response: Some(EMERGENCY_RESPONSE),
                };
            }
        }
        GateResult {
            is_crisis: false,
            canned_response: None,
        }
    }
}

impl Default for CrisisGate {
    fn default() -> Self {
        Self::new()
    }
}
