//! Coach agent: sanitizes the input, gates on golf vocabulary, and produces
//! independent notes and tips sections.
//!
//! An out-of-domain message is answered with a fixed rejection (an ordinary
//! successful response, not an error) and no LLM call is made for it.

use std::sync::Arc;

use crate::agents::Agent;
use crate::config::AnalysisConfig;
use crate::error::AgentResult;
use crate::llm::{LlmMode, ProviderKind, StructuredClient};
use crate::shared::{AgentRequest, AgentResponse, AgentType};
use crate::text;

/// Fixed result for input that mentions no golf keyword.
pub const INVALID_GOLF_INPUT: &str = "Invalid golf input";

pub struct CoachAgent {
    mode: LlmMode,
    client: Arc<StructuredClient>,
    notes_params: AnalysisConfig,
    tips_params: AnalysisConfig,
}

impl CoachAgent {
    pub fn new(
        mode: LlmMode,
        client: Arc<StructuredClient>,
        notes_params: AnalysisConfig,
        tips_params: AnalysisConfig,
    ) -> Self {
        Self {
            mode,
            client,
            notes_params,
            tips_params,
        }
    }

    /// Sanitized message plus detected focus keywords, shared by both sections.
    fn prompt_payload(sanitized: &str) -> String {
        let keywords = text::matched_keywords(sanitized);
        if keywords.is_empty() {
            sanitized.to_string()
        } else {
            format!("{}\n\nFocus areas: {}", sanitized, keywords.join(", "))
        }
    }

    async fn get_player_notes(&self, payload: &str) -> AgentResult<String> {
        match self.mode {
            LlmMode::Mock => Ok(format!(
                "Observed focus: {}",
                text::matched_keywords(payload).join(", ")
            )),
            LlmMode::Live => {
                let notes = self
                    .client
                    .complete_text(ProviderKind::OpenAi, &self.notes_params, payload)
                    .await?;
                Ok(notes)
            }
        }
    }

    async fn get_player_tips(&self, payload: &str) -> AgentResult<String> {
        match self.mode {
            LlmMode::Mock => Ok(
                "Keep your grip pressure light and rehearse the motion slowly before each shot."
                    .to_string(),
            ),
            LlmMode::Live => {
                let tips = self
                    .client
                    .complete_text(ProviderKind::OpenAi, &self.tips_params, payload)
                    .await?;
                Ok(tips)
            }
        }
    }
}

#[async_trait::async_trait]
impl Agent for CoachAgent {
    fn agent_type(&self) -> AgentType {
        AgentType::Coach
    }

    async fn process_request(&self, request: &AgentRequest) -> AgentResult<Vec<AgentResponse>> {
        let tag = request.agent_config.agent_type;
        let sanitized = text::sanitize_input(&request.user_input.content);

        // Domain gate: short-circuit before any external call.
        if !text::is_golf_related(&sanitized) {
            return Ok(vec![AgentResponse {
                agent_type: tag,
                result: INVALID_GOLF_INPUT.to_string(),
                metadata: None,
            }]);
        }

        let payload = Self::prompt_payload(&sanitized);
        let notes = self.get_player_notes(&payload).await?;
        let tips = self.get_player_tips(&payload).await?;

        let result =
            text::format_agent_response(tag, &format!("{{notes: {}, tips: {}}}", notes, tips));
        Ok(vec![AgentResponse {
            agent_type: tag,
            result,
            metadata: None,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoreConfig, ProviderCredentials};
    use crate::shared::{AgentConfig, InputType, UserInput};

    fn coach(mode: LlmMode) -> CoachAgent {
        let config = CoreConfig::default();
        CoachAgent::new(
            mode,
            Arc::new(StructuredClient::new(&ProviderCredentials::default())),
            config.coach_notes,
            config.coach_tips,
        )
    }

    fn request(content: &str) -> AgentRequest {
        AgentRequest {
            user_input: UserInput {
                input_type: InputType::Text,
                content: content.to_string(),
                file_path: None,
            },
            agent_config: AgentConfig {
                agent_type: AgentType::Coach,
                user_context: "Golf assistant".to_string(),
                credentials: ProviderCredentials::default(),
            },
            sentiment_analysis: None,
            agent_type_analysis: None,
        }
    }

    #[tokio::test]
    async fn out_of_domain_input_gets_the_fixed_rejection() {
        let responses = coach(LlmMode::Mock)
            .process_request(&request("I need advice on improving"))
            .await
            .unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].result, INVALID_GOLF_INPUT);
    }

    #[tokio::test]
    async fn rejection_short_circuits_before_any_llm_call() {
        // Live mode with no API keys: a reached LLM call would fail with
        // MissingCredentials, so an Ok rejection proves the short-circuit.
        let responses = coach(LlmMode::Live)
            .process_request(&request("I need advice on improving"))
            .await
            .unwrap();
        assert_eq!(responses[0].result, INVALID_GOLF_INPUT);

        let err = coach(LlmMode::Live)
            .process_request(&request("I need advice on my putt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing API key"));
    }

    #[tokio::test]
    async fn golf_input_yields_tagged_notes_and_tips() {
        let responses = coach(LlmMode::Mock)
            .process_request(&request("I need advice on my putt"))
            .await
            .unwrap();
        assert_eq!(responses.len(), 1);
        let result = &responses[0].result;
        assert!(result.starts_with("CoachAgent:"));
        assert!(result.contains("notes:"));
        assert!(result.contains("tips:"));
    }
}
