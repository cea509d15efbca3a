//! Shared types used across the Fairway crates.
//!
//! Everything here is a request-scoped value object: created at the HTTP
//! boundary, passed down the agent call chain by reference, and discarded when
//! the response is written. No entity has cross-request identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ProviderCredentials;
use crate::error::{AgentError, AgentResult, AnalysisError};

// -----------------------------------------------------------------------------
// User input
// -----------------------------------------------------------------------------

/// Kind of payload the user submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    File,
    Text,
    Image,
    Audio,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputType::File => "file",
            InputType::Text => "text",
            InputType::Image => "image",
            InputType::Audio => "audio",
        };
        f.write_str(s)
    }
}

/// Raw user submission. Invariant: `file_path` is required iff
/// `input_type == File`; everything else ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub input_type: InputType,
    pub content: String,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl UserInput {
    /// Boundary validation: must pass before any agent or analysis runs.
    pub fn validate(&self) -> AgentResult<()> {
        if self.input_type == InputType::File
            && self.file_path.as_deref().map_or(true, |p| p.trim().is_empty())
        {
            return Err(AgentError::InvalidInput(
                "file path is required for file input type".to_string(),
            ));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Agent routing tags
// -----------------------------------------------------------------------------

/// Closed set of routing tags. `Caddie`, `Coach`, and `Skill` have agent
/// implementations; `Course` and `Data` are recognized tags with no handler
/// yet, so dispatching to them is a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentType {
    #[serde(rename = "CaddieAgent")]
    Caddie,
    #[serde(rename = "SkillAgent")]
    Skill,
    #[serde(rename = "CoachAgent")]
    Coach,
    #[serde(rename = "CourseAgent")]
    Course,
    #[serde(rename = "DataAgent")]
    Data,
}

impl AgentType {
    /// All known tags, in routing-analysis order.
    pub const ALL: [AgentType; 5] = [
        AgentType::Caddie,
        AgentType::Skill,
        AgentType::Coach,
        AgentType::Course,
        AgentType::Data,
    ];

    /// Wire name, identical to the serde tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::Caddie => "CaddieAgent",
            AgentType::Skill => "SkillAgent",
            AgentType::Coach => "CoachAgent",
            AgentType::Course => "CourseAgent",
            AgentType::Data => "DataAgent",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Agent request/response envelope
// -----------------------------------------------------------------------------

/// Per-request agent configuration, built by the dispatcher. Credentials are
/// resolved once at process start and cloned in, never looked up lazily.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub agent_type: AgentType,
    pub user_context: String,
    pub credentials: ProviderCredentials,
}

/// Everything an agent needs for one `process_request` call. The optional
/// analyses let a caller pass precomputed results; agents that need them and
/// find `None` run the analysis themselves.
#[derive(Debug, Clone)]
pub struct AgentRequest {
    pub user_input: UserInput,
    pub agent_config: AgentConfig,
    pub sentiment_analysis: Option<SentimentAnalysis>,
    pub agent_type_analysis: Option<AgentTypeAnalysis>,
}

/// One agent answer. The advisory agent returns several of these per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub agent_type: AgentType,
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

// -----------------------------------------------------------------------------
// Structured analysis schemas
// -----------------------------------------------------------------------------

/// Overall sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTag {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentTag::Positive => "positive",
            SentimentTag::Neutral => "neutral",
            SentimentTag::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// Target schema for the sentiment analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// The overall sentiment of the text.
    pub sentiment: SentimentTag,
    /// Confidence score, 0.0–1.0.
    pub confidence: f32,
    /// Brief explanation, at most 500 characters.
    pub explanation: String,
}

impl SentimentAnalysis {
    /// Rejects provider replies that decode but violate the declared ranges.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(AnalysisError::Schema(format!(
                "sentiment confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        if self.explanation.chars().count() > 500 {
            return Err(AnalysisError::Schema(
                "sentiment explanation exceeds 500 characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Routing confidence for one agent type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTypeConfidence {
    /// How well the input matches this agent's domain, 0.0–1.0.
    pub confidence: f32,
    /// Brief reasoning for the score.
    pub explanation: String,
}

/// Target schema for the agent-type routing call: one confidence/explanation
/// pair per known agent type, produced by a single structured reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTypeAnalysis {
    pub caddie: AgentTypeConfidence,
    pub skill: AgentTypeConfidence,
    pub coach: AgentTypeConfidence,
    pub course: AgentTypeConfidence,
    pub data: AgentTypeConfidence,
}

impl AgentTypeAnalysis {
    /// Entries paired with their tags, in `AgentType::ALL` order.
    pub fn per_agent(&self) -> [(AgentType, &AgentTypeConfidence); 5] {
        [
            (AgentType::Caddie, &self.caddie),
            (AgentType::Skill, &self.skill),
            (AgentType::Coach, &self.coach),
            (AgentType::Course, &self.course),
            (AgentType::Data, &self.data),
        ]
    }

    /// The tag with the highest routing confidence.
    pub fn best(&self) -> (AgentType, &AgentTypeConfidence) {
        let mut best = (AgentType::Caddie, &self.caddie);
        for (tag, entry) in self.per_agent() {
            if entry.confidence > best.1.confidence {
                best = (tag, entry);
            }
        }
        best
    }

    /// Rejects replies with any confidence outside [0, 1].
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (tag, entry) in self.per_agent() {
            if !(0.0..=1.0).contains(&entry.confidence) {
                return Err(AnalysisError::Schema(format!(
                    "{} routing confidence {} outside [0, 1]",
                    tag, entry.confidence
                )));
            }
        }
        Ok(())
    }
}
