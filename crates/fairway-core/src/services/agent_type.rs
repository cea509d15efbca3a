//! Agent-type routing analysis: UserInput → per-agent confidence scores.
//!
//! One structured call scores every known agent type at once; there is never
//! one call per type.

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::AgentResult;
use crate::llm::{LlmMode, ProviderKind, StructuredClient};
use crate::services::flatten_user_input;
use crate::shared::{AgentTypeAnalysis, AgentTypeConfidence, UserInput};

pub struct AgentTypeService {
    mode: LlmMode,
    params: AnalysisConfig,
    client: Arc<StructuredClient>,
}

impl AgentTypeService {
    pub fn new(mode: LlmMode, params: AnalysisConfig, client: Arc<StructuredClient>) -> Self {
        Self {
            mode,
            params,
            client,
        }
    }

    /// Scores with the default provider (OpenAI).
    pub async fn analyze(&self, input: &UserInput) -> AgentResult<AgentTypeAnalysis> {
        self.analyze_with(input, ProviderKind::OpenAi).await
    }

    /// Scores with an explicit provider.
    pub async fn analyze_with(
        &self,
        input: &UserInput,
        provider: ProviderKind,
    ) -> AgentResult<AgentTypeAnalysis> {
        match self.mode {
            LlmMode::Mock => Ok(Self::mock_routing(input)),
            LlmMode::Live => {
                let block = flatten_user_input(input);
                let analysis: AgentTypeAnalysis =
                    self.client.complete(provider, &self.params, &block).await?;
                analysis.validate()?;
                Ok(analysis)
            }
        }
    }

    /// Deterministic keyword routing for offline mode: each agent domain gets
    /// a high score when its trigger words appear, a floor score otherwise.
    fn mock_routing(input: &UserInput) -> AgentTypeAnalysis {
        let lower = input.content.to_lowercase();
        let entry = |triggers: &[&str], domain: &str| {
            let hit = triggers.iter().any(|w| lower.contains(w));
            AgentTypeConfidence {
                confidence: if hit { 0.85 } else { 0.1 },
                explanation: if hit {
                    format!("Input mentions {} vocabulary.", domain)
                } else {
                    format!("No {} vocabulary detected.", domain)
                },
            }
        };

        AgentTypeAnalysis {
            caddie: entry(&["club", "yardage", "wind", "strategy", "advice"], "on-course strategy"),
            skill: entry(&["lie", "rough", "buried", "sand", "slope"], "lie assessment"),
            coach: entry(&["swing", "grip", "stance", "drill", "practice"], "coaching"),
            course: entry(&["course", "layout", "conditions"], "course knowledge"),
            data: entry(&["stat", "score", "handicap", "average"], "statistics"),
        }
    }
}
