//! Caddie (advisory) agent: surfaces the sentiment and routing analyses as
//! one response each.
//!
//! The two analyses have no data dependency, so they are issued concurrently;
//! sequential execution would be equally correct, this just halves the
//! round-trip latency.

use std::sync::Arc;

use serde_json::json;

use crate::agents::Agent;
use crate::error::AgentResult;
use crate::services::{AgentTypeService, SentimentService};
use crate::shared::{AgentRequest, AgentResponse, AgentType, SentimentTag};
use crate::text;

pub struct CaddieAgent {
    sentiment: Arc<SentimentService>,
    routing: Arc<AgentTypeService>,
}

impl CaddieAgent {
    pub fn new(sentiment: Arc<SentimentService>, routing: Arc<AgentTypeService>) -> Self {
        Self { sentiment, routing }
    }
}

#[async_trait::async_trait]
impl Agent for CaddieAgent {
    fn agent_type(&self) -> AgentType {
        AgentType::Caddie
    }

    async fn process_request(&self, request: &AgentRequest) -> AgentResult<Vec<AgentResponse>> {
        let tag = request.agent_config.agent_type;

        // Precomputed analyses on the request win; otherwise run both now.
        let (sentiment, routing) = tokio::join!(
            async {
                match &request.sentiment_analysis {
                    Some(s) => Ok(s.clone()),
                    None => self.sentiment.analyze(&request.user_input.content).await,
                }
            },
            async {
                match &request.agent_type_analysis {
                    Some(a) => Ok(a.clone()),
                    None => self.routing.analyze(&request.user_input).await,
                }
            },
        );
        let sentiment = sentiment?;
        let routing = routing?;

        let score = match sentiment.sentiment {
            SentimentTag::Positive => text::sentiment_score(sentiment.confidence, 0.0),
            SentimentTag::Negative => text::sentiment_score(0.0, sentiment.confidence),
            SentimentTag::Neutral => text::sentiment_score(0.0, 0.0),
        };
        let mut sentiment_meta = serde_json::Map::new();
        sentiment_meta.insert("analysis".to_string(), json!("sentiment"));
        sentiment_meta.insert("sentiment".to_string(), json!(sentiment.sentiment));
        sentiment_meta.insert("confidence".to_string(), json!(sentiment.confidence));
        sentiment_meta.insert("score".to_string(), json!(score));
        let sentiment_response = AgentResponse {
            agent_type: tag,
            result: format!(
                "Sentiment: {} ({:.0}% confidence). {}",
                sentiment.sentiment,
                sentiment.confidence * 100.0,
                sentiment.explanation
            ),
            metadata: Some(sentiment_meta),
        };

        let (best_tag, best) = routing.best();
        let mut routing_meta = serde_json::Map::new();
        routing_meta.insert("analysis".to_string(), json!("agent_type"));
        for (agent, entry) in routing.per_agent() {
            routing_meta.insert(agent.as_str().to_string(), json!(entry.confidence));
        }
        let routing_response = AgentResponse {
            agent_type: tag,
            result: format!(
                "Best agent match: {} ({:.0}% confidence). {}",
                best_tag,
                best.confidence * 100.0,
                best.explanation
            ),
            metadata: Some(routing_meta),
        };

        Ok(vec![sentiment_response, routing_response])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoreConfig, ProviderCredentials};
    use crate::llm::{LlmMode, StructuredClient};
    use crate::shared::{AgentConfig, InputType, UserInput};

    fn mock_caddie() -> CaddieAgent {
        let config = CoreConfig::default();
        let client = Arc::new(StructuredClient::new(&ProviderCredentials::default()));
        CaddieAgent::new(
            Arc::new(SentimentService::new(
                LlmMode::Mock,
                config.sentiment.clone(),
                Arc::clone(&client),
            )),
            Arc::new(AgentTypeService::new(
                LlmMode::Mock,
                config.agent_routing,
                client,
            )),
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
                agent_type: AgentType::Caddie,
                user_context: "Golf assistant".to_string(),
                credentials: ProviderCredentials::default(),
            },
            sentiment_analysis: None,
            agent_type_analysis: None,
        }
    }

    #[tokio::test]
    async fn returns_one_response_per_analysis() {
        let responses = mock_caddie()
            .process_request(&request("I love my new driver, any advice on strategy?"))
            .await
            .unwrap();
        assert_eq!(responses.len(), 2);
        for response in &responses {
            assert_eq!(response.agent_type, AgentType::Caddie);
        }
        let kinds: Vec<_> = responses
            .iter()
            .map(|r| r.metadata.as_ref().unwrap()["analysis"].clone())
            .collect();
        assert_eq!(kinds, vec![json!("sentiment"), json!("agent_type")]);
    }

    #[tokio::test]
    async fn routing_metadata_covers_every_agent_tag() {
        let responses = mock_caddie()
            .process_request(&request("what club for this yardage"))
            .await
            .unwrap();
        let routing_meta = responses[1].metadata.as_ref().unwrap();
        for tag in AgentType::ALL {
            let confidence = routing_meta[tag.as_str()].as_f64().unwrap();
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}
