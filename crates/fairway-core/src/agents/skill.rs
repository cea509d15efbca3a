//! Skill agent: wraps the lie-analysis operation as a single response.

use std::sync::Arc;

use crate::agents::Agent;
use crate::error::AgentResult;
use crate::services::LieAnalysisService;
use crate::shared::{AgentRequest, AgentResponse, AgentType};

pub struct SkillAgent {
    lie: Arc<LieAnalysisService>,
}

impl SkillAgent {
    pub fn new(lie: Arc<LieAnalysisService>) -> Self {
        Self { lie }
    }
}

#[async_trait::async_trait]
impl Agent for SkillAgent {
    fn agent_type(&self) -> AgentType {
        AgentType::Skill
    }

    async fn process_request(&self, request: &AgentRequest) -> AgentResult<Vec<AgentResponse>> {
        let lie_analysis = self.lie.analyze(&request.user_input).await?;
        Ok(vec![AgentResponse {
            agent_type: request.agent_config.agent_type,
            result: lie_analysis,
            metadata: None,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoreConfig, ProviderCredentials};
    use crate::llm::{LlmMode, StructuredClient};
    use crate::shared::{AgentConfig, InputType, UserInput};

    #[tokio::test]
    async fn wraps_the_lie_analysis_as_one_response() {
        let client = Arc::new(StructuredClient::new(&ProviderCredentials::default()));
        let agent = SkillAgent::new(Arc::new(LieAnalysisService::new(
            LlmMode::Mock,
            CoreConfig::default().lie_analysis,
            client,
        )));
        let request = AgentRequest {
            user_input: UserInput {
                input_type: InputType::Text,
                content: "ball half buried in the bunker lip".to_string(),
                file_path: None,
            },
            agent_config: AgentConfig {
                agent_type: AgentType::Skill,
                user_context: "Golf assistant".to_string(),
                credentials: ProviderCredentials::default(),
            },
            sentiment_analysis: None,
            agent_type_analysis: None,
        };

        let responses = agent.process_request(&request).await.unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].agent_type, AgentType::Skill);
        assert!(responses[0].result.contains("bunker"));
    }
}
