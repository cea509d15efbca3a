//! Sentiment analysis: text → {sentiment, confidence, explanation}.
//!
//! Default provider is Groq; callers can select OpenAI instead via
//! `analyze_with`. The two are interchangeable behind the same contract.

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::AgentResult;
use crate::llm::{LlmMode, ProviderKind, StructuredClient};
use crate::shared::{SentimentAnalysis, SentimentTag};

pub struct SentimentService {
    mode: LlmMode,
    params: AnalysisConfig,
    client: Arc<StructuredClient>,
}

impl SentimentService {
    pub fn new(mode: LlmMode, params: AnalysisConfig, client: Arc<StructuredClient>) -> Self {
        Self {
            mode,
            params,
            client,
        }
    }

    /// Classifies with the default provider (Groq).
    pub async fn analyze(&self, text: &str) -> AgentResult<SentimentAnalysis> {
        self.analyze_with(text, ProviderKind::Groq).await
    }

    /// Classifies with an explicit provider. The reply is validated against
    /// the declared field ranges; a violating reply is rejected, not patched.
    pub async fn analyze_with(
        &self,
        text: &str,
        provider: ProviderKind,
    ) -> AgentResult<SentimentAnalysis> {
        match self.mode {
            LlmMode::Mock => Ok(Self::mock_sentiment(text)),
            LlmMode::Live => {
                let analysis: SentimentAnalysis =
                    self.client.complete(provider, &self.params, text).await?;
                analysis.validate()?;
                Ok(analysis)
            }
        }
    }

    /// Deterministic keyword heuristic for offline mode.
    fn mock_sentiment(text: &str) -> SentimentAnalysis {
        let lower = text.to_lowercase();
        let positive = ["great", "love", "best", "improv", "finally", "nailed"];
        let negative = ["frustrat", "terrible", "worst", "hate", "shank", "awful"];

        let (sentiment, confidence) = if positive.iter().any(|w| lower.contains(w)) {
            (SentimentTag::Positive, 0.85)
        } else if negative.iter().any(|w| lower.contains(w)) {
            (SentimentTag::Negative, 0.85)
        } else {
            (SentimentTag::Neutral, 0.6)
        };

        SentimentAnalysis {
            sentiment,
            confidence,
            explanation: format!("Keyword heuristic classified the message as {}.", sentiment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoreConfig, ProviderCredentials};

    fn mock_service() -> SentimentService {
        SentimentService::new(
            LlmMode::Mock,
            CoreConfig::default().sentiment,
            Arc::new(StructuredClient::new(&ProviderCredentials::default())),
        )
    }

    #[tokio::test]
    async fn mock_results_always_satisfy_the_schema_ranges() {
        let service = mock_service();
        for text in [
            "Finally nailed my drive today!",
            "Another frustrating round, shanked everything",
            "What club should I use here?",
        ] {
            let analysis = service.analyze(text).await.unwrap();
            assert!((0.0..=1.0).contains(&analysis.confidence));
            assert!(analysis.explanation.chars().count() <= 500);
            assert!(analysis.validate().is_ok());
        }
    }

    #[tokio::test]
    async fn mock_heuristic_is_deterministic_across_providers() {
        let service = mock_service();
        let a = service
            .analyze_with("I love this course", ProviderKind::Groq)
            .await
            .unwrap();
        let b = service
            .analyze_with("I love this course", ProviderKind::OpenAi)
            .await
            .unwrap();
        assert_eq!(a.sentiment, SentimentTag::Positive);
        assert_eq!(a.sentiment, b.sentiment);
        assert_eq!(a.confidence, b.confidence);
    }
}
