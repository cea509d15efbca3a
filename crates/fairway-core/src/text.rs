//! Text utilities for the agent pipeline: sanitization, the golf-domain
//! keyword gate, and small scoring/formatting helpers used by the agents.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::AgentType;

/// Keywords that mark an input as golf-related. The gate is case-insensitive.
pub const GOLF_KEYWORDS: [&str; 10] = [
    "golf", "putt", "drive", "fairway", "green", "bunker", "hole", "par", "birdie", "bogey",
];

static SANITIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?]").expect("sanitize pattern is valid"));

/// Strips everything but word, whitespace, and basic punctuation characters.
/// Idempotent: sanitizing twice yields the same string.
pub fn sanitize_input(text: &str) -> String {
    SANITIZE_RE.replace_all(text, "").into_owned()
}

/// Golf keywords present in the text, in `GOLF_KEYWORDS` order.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    GOLF_KEYWORDS
        .iter()
        .copied()
        .filter(|k| lower.contains(k))
        .collect()
}

/// True when the input mentions at least one golf keyword.
pub fn is_golf_related(text: &str) -> bool {
    let lower = text.to_lowercase();
    GOLF_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Formats an agent's result for display: `"<agent_type>: <result>"`.
pub fn format_agent_response(agent_type: AgentType, result: &str) -> String {
    format!("{}: {}", agent_type, result)
}

/// Collapses positive/negative confidence into one score, normalized to [0, 1].
pub fn sentiment_score(positive: f32, negative: f32) -> f32 {
    ((positive - negative + 1.0) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_special_characters() {
        assert_eq!(
            sanitize_input("How do I fix my <b>slice</b>?! $$$"),
            "How do I fix my bsliceb?! "
        );
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "plain text, nothing odd.",
            "semi;colons & pipes | and {braces}",
            "émojis 🏌️ and accents stay wordy",
        ];
        for input in inputs {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once);
        }
    }

    #[test]
    fn keyword_gate_is_case_insensitive() {
        assert!(is_golf_related("My PUTTING is off"));
        assert!(is_golf_related("stuck in a Bunker again"));
        assert!(!is_golf_related("I need advice on improving"));
        assert_eq!(matched_keywords("Par putt on the green"), vec!["putt", "green", "par"]);
    }

    #[test]
    fn response_format_leads_with_the_tag() {
        let formatted = format_agent_response(AgentType::Coach, "{notes: a, tips: b}");
        assert_eq!(formatted, "CoachAgent: {notes: a, tips: b}");
    }

    #[test]
    fn sentiment_score_normalizes_to_unit_range() {
        assert_eq!(sentiment_score(1.0, 0.0), 1.0);
        assert_eq!(sentiment_score(0.0, 1.0), 0.0);
        assert_eq!(sentiment_score(0.0, 0.0), 0.5);
    }
}
