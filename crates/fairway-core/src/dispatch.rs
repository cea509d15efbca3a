//! Dispatch layer: a routing tag plus validated user input becomes an agent
//! invocation.
//!
//! Built once at startup from the loaded config and startup-resolved
//! credentials, then shared behind an `Arc`. The tag switch is exhaustive: a
//! recognized tag with no handler is a client error, never a default agent.

use std::sync::Arc;

use crate::agents::{Agent, CaddieAgent, CoachAgent, SkillAgent};
use crate::config::{CoreConfig, ProviderCredentials};
use crate::error::{AgentError, AgentResult};
use crate::llm::{LlmMode, StructuredClient};
use crate::services::{AgentTypeService, LieAnalysisService, SentimentService};
use crate::shared::{AgentConfig, AgentRequest, AgentResponse, AgentType, UserInput};

pub struct AgentDispatcher {
    config: Arc<CoreConfig>,
    credentials: ProviderCredentials,
    mode: LlmMode,
    client: Arc<StructuredClient>,
    sentiment: Arc<SentimentService>,
    routing: Arc<AgentTypeService>,
    lie: Arc<LieAnalysisService>,
}

impl AgentDispatcher {
    pub fn new(config: Arc<CoreConfig>, credentials: ProviderCredentials) -> Self {
        let mode = LlmMode::parse(&config.llm_mode);
        let client = Arc::new(StructuredClient::new(&credentials));
        let sentiment = Arc::new(SentimentService::new(
            mode,
            config.sentiment.clone(),
            Arc::clone(&client),
        ));
        let routing = Arc::new(AgentTypeService::new(
            mode,
            config.agent_routing.clone(),
            Arc::clone(&client),
        ));
        let lie = Arc::new(LieAnalysisService::new(
            mode,
            config.lie_analysis.clone(),
            Arc::clone(&client),
        ));
        Self {
            config,
            credentials,
            mode,
            client,
            sentiment,
            routing,
            lie,
        }
    }

    /// Shared sentiment service, also exposed as its own endpoint.
    pub fn sentiment(&self) -> Arc<SentimentService> {
        Arc::clone(&self.sentiment)
    }

    /// Shared agent-type routing service, also exposed as its own endpoint.
    pub fn agent_types(&self) -> Arc<AgentTypeService> {
        Arc::clone(&self.routing)
    }

    /// Validates the input, instantiates the matching agent variant, and
    /// returns its responses unchanged. Any failure propagates untouched to
    /// the transport boundary.
    pub async fn dispatch(
        &self,
        agent_type: AgentType,
        user_input: UserInput,
    ) -> AgentResult<Vec<AgentResponse>> {
        user_input.validate()?;

        let agent: Box<dyn Agent> = match agent_type {
            AgentType::Caddie => Box::new(CaddieAgent::new(
                Arc::clone(&self.sentiment),
                Arc::clone(&self.routing),
            )),
            AgentType::Coach => Box::new(CoachAgent::new(
                self.mode,
                Arc::clone(&self.client),
                self.config.coach_notes.clone(),
                self.config.coach_tips.clone(),
            )),
            AgentType::Skill => Box::new(SkillAgent::new(Arc::clone(&self.lie))),
            AgentType::Course | AgentType::Data => {
                return Err(AgentError::UnknownAgentType(agent_type.to_string()));
            }
        };

        let agent_config = AgentConfig {
            agent_type,
            user_context: self.config.user_context.clone(),
            credentials: self.credentials.clone(),
        };
        let request = AgentRequest {
            user_input,
            agent_config,
            sentiment_analysis: None,
            agent_type_analysis: None,
        };

        tracing::info!(
            target: "fairway::dispatch",
            agent = agent_type.as_str(),
            input_type = %request.user_input.input_type,
            "dispatching request"
        );
        agent.process_request(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::INVALID_GOLF_INPUT;
    use crate::shared::InputType;

    fn dispatcher(llm_mode: &str) -> AgentDispatcher {
        let config = CoreConfig {
            llm_mode: llm_mode.to_string(),
            ..CoreConfig::default()
        };
        AgentDispatcher::new(Arc::new(config), ProviderCredentials::default())
    }

    fn text_input(content: &str) -> UserInput {
        UserInput {
            input_type: InputType::Text,
            content: content.to_string(),
            file_path: None,
        }
    }

    #[tokio::test]
    async fn file_input_without_path_is_rejected_before_any_agent() {
        let input = UserInput {
            input_type: InputType::File,
            content: "swing video".to_string(),
            file_path: None,
        };
        let err = dispatcher("mock")
            .dispatch(AgentType::Caddie, input)
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unhandled_tags_fail_without_any_network_call() {
        // Live mode with no API keys: reaching a provider would produce a
        // MissingCredentials analysis error, so UnknownAgentType proves the
        // dispatch bailed out first.
        for tag in [AgentType::Course, AgentType::Data] {
            let err = dispatcher("live")
                .dispatch(tag, text_input("how long is hole 7"))
                .await
                .unwrap_err();
            assert!(matches!(err, AgentError::UnknownAgentType(_)), "{tag}");
        }
    }

    #[tokio::test]
    async fn caddie_dispatch_returns_both_analyses() {
        let responses = dispatcher("mock")
            .dispatch(AgentType::Caddie, text_input("need strategy advice"))
            .await
            .unwrap();
        assert_eq!(responses.len(), 2);
    }

    #[tokio::test]
    async fn coach_dispatch_distinguishes_golf_from_generic_advice() {
        let dispatcher = dispatcher("mock");

        let golf = dispatcher
            .dispatch(
                AgentType::Coach,
                text_input("I need advice on my putt"),
            )
            .await
            .unwrap();
        assert_ne!(golf[0].result, INVALID_GOLF_INPUT);
        assert!(golf[0].result.starts_with("CoachAgent:"));

        let generic = dispatcher
            .dispatch(
                AgentType::Coach,
                text_input("I need advice on improving"),
            )
            .await
            .unwrap();
        assert_eq!(generic[0].result, INVALID_GOLF_INPUT);
    }
}
