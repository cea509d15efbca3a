//! Agent variants: stateless handlers mapping a request to one or more
//! responses, possibly consulting the analysis services.

mod caddie;
mod coach;
mod skill;

pub use caddie::CaddieAgent;
pub use coach::{CoachAgent, INVALID_GOLF_INPUT};
pub use skill::SkillAgent;

use crate::error::AgentResult;
use crate::shared::{AgentRequest, AgentResponse, AgentType};

/// Capability implemented by all agent variants. Agents hold no per-call
/// state; everything they need arrives in the request or was injected at
/// construction.
#[async_trait::async_trait]
pub trait Agent: Send + Sync {
    /// Routing tag this agent answers for.
    fn agent_type(&self) -> AgentType;

    /// Processes one request. The advisory agent returns several responses;
    /// the others return exactly one.
    async fn process_request(&self, request: &AgentRequest) -> AgentResult<Vec<AgentResponse>>;
}
