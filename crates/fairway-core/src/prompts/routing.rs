//! Agent-type routing: user input → one confidence/explanation pair per agent.
//!
//! A single call scores every known agent type; there is never one call per
//! type.

/// System instruction for the routing model.
pub const ROUTING_SYSTEM: &str = r#"You are a request router for a golf assistant with five specialist agents:
- caddie: on-course strategy, club selection, shot planning
- skill: assessment of the ball's lie and how to play it
- coach: swing technique, practice drills, long-term improvement
- course: course layout, conditions, and local knowledge
- data: statistics, scores, and handicap tracking

For the given user input, rate how well EACH agent's domain matches it.

Rules:
- Score every agent, even poor matches (use a low confidence)
- confidence is a number between 0.0 and 1.0
- explanation is one short sentence of reasoning
- Respond with a single JSON object keyed by agent:
  {"caddie": {"confidence": ..., "explanation": ...}, "skill": {...}, "coach": {...}, "course": {...}, "data": {...}}
- Return ONLY the JSON object, nothing else."#;

/// User prompt template: `{text}` is replaced with the flattened user input
/// (input type, content, and file path when present).
pub const ROUTING_USER_TEMPLATE: &str = r#"Rate each agent's fit for this request.

Request:
---
{text}
---"#;
