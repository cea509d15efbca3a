//! Sentiment classification: golfer message → {sentiment, confidence, explanation}.

/// System instruction for the sentiment model.
pub const SENTIMENT_SYSTEM: &str = r#"You are a sentiment analyst for a golf assistant.
Classify the emotional tone of a golfer's message.

Rules:
- sentiment is exactly one of: "positive", "neutral", "negative"
- confidence is a number between 0.0 and 1.0
- explanation is a brief justification, 500 characters at most
- Respond with a single JSON object: {"sentiment": ..., "confidence": ..., "explanation": ...}
- Return ONLY the JSON object, nothing else."#;

/// User prompt template: `{text}` is replaced with the raw message content.
pub const SENTIMENT_USER_TEMPLATE: &str = r#"Analyze the sentiment of the following message from a golfer.

Message:
---
{text}
---"#;
