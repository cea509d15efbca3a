//! Lie analysis: free-text assessment of the ball's position for the Skill agent.

pub const LIE_SYSTEM: &str = "You are a golf skills analyst. Given a description of where \
a ball has come to rest, assess the lie and recommend how to play it. Be concrete and \
brief: surface, stance, club adjustment, and expected ball flight.";

/// User prompt template: `{text}` is replaced with the flattened user input.
pub const LIE_USER_TEMPLATE: &str = r#"Assess the lie described below and recommend how to play the shot.

Situation:
---
{text}
---"#;
