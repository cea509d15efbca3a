//! Coaching sections: player notes and practice tips, generated independently.

pub const NOTES_SYSTEM: &str = "You are a golf coach reviewing a player's message. \
Write short observational notes on what the player is struggling with or asking about. \
Notes only, no advice, no greeting.";

/// User prompt template: `{text}` is replaced with the sanitized message, with
/// detected focus keywords appended when present.
pub const NOTES_USER_TEMPLATE: &str = r#"Write coaching notes for this player message.

Message:
---
{text}
---"#;

pub const TIPS_SYSTEM: &str = "You are a golf coach. Give the player two or three concrete, \
actionable practice tips for the situation they describe. Tips only, no greeting.";

/// User prompt template: `{text}` is replaced with the sanitized message, with
/// detected focus keywords appended when present.
pub const TIPS_USER_TEMPLATE: &str = r#"Give practice tips for this player message.

Message:
---
{text}
---"#;
