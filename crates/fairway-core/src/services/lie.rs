//! Lie analysis: free-text assessment of the ball's position for the Skill agent.

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::AgentResult;
use crate::llm::{LlmMode, ProviderKind, StructuredClient};
use crate::services::flatten_user_input;
use crate::shared::UserInput;

pub struct LieAnalysisService {
    mode: LlmMode,
    params: AnalysisConfig,
    client: Arc<StructuredClient>,
}

impl LieAnalysisService {
    pub fn new(mode: LlmMode, params: AnalysisConfig, client: Arc<StructuredClient>) -> Self {
        Self {
            mode,
            params,
            client,
        }
    }

    /// Assesses the described lie. Free text, no schema constraint.
    pub async fn analyze(&self, input: &UserInput) -> AgentResult<String> {
        match self.mode {
            LlmMode::Mock => Ok(Self::mock_lie(input)),
            LlmMode::Live => {
                let block = flatten_user_input(input);
                let text = self
                    .client
                    .complete_text(ProviderKind::OpenAi, &self.params, &block)
                    .await?;
                Ok(text)
            }
        }
    }

    fn mock_lie(input: &UserInput) -> String {
        let preview: String = input.content.chars().take(80).collect();
        format!(
            "Lie assessment for \"{}\": clean lie on short grass, normal stance; \
             take one more club and swing smoothly.",
            preview
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoreConfig, ProviderCredentials};
    use crate::shared::InputType;

    #[tokio::test]
    async fn mock_assessment_echoes_the_situation() {
        let service = LieAnalysisService::new(
            LlmMode::Mock,
            CoreConfig::default().lie_analysis,
            Arc::new(StructuredClient::new(&ProviderCredentials::default())),
        );
        let input = UserInput {
            input_type: InputType::Text,
            content: "ball sitting down in wet rough".to_string(),
            file_path: None,
        };
        let result = service.analyze(&input).await.unwrap();
        assert!(result.contains("ball sitting down in wet rough"));
        assert!(result.starts_with("Lie assessment"));
    }
}
