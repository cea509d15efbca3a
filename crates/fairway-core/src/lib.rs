//! fairway-core: golf assistant core library.
//!
//! Shared request/response types, the structured-output LLM client over two
//! interchangeable providers, the analysis services, the agent variants, and
//! the dispatch layer the gateway drives.

mod agents;
mod config;
mod dispatch;
mod error;
mod llm;
mod services;
mod shared;
pub mod prompts;
pub mod text;

// Shared types (request-scoped value objects)
pub use shared::{
    AgentConfig, AgentRequest, AgentResponse, AgentType, AgentTypeAnalysis, AgentTypeConfidence,
    InputType, SentimentAnalysis, SentimentTag, UserInput,
};

// Configuration (loaded once at startup, injected by parameter)
pub use config::{AnalysisConfig, CoreConfig, ProviderCredentials};

// Errors
pub use error::{AgentError, AgentResult, AnalysisError};

// Structured-output client
pub use llm::{LlmMode, ProviderKind, StructuredClient, TEXT_PLACEHOLDER};

// Analysis services
pub use services::{
    flatten_user_input, AgentTypeService, LieAnalysisService, SentimentService,
};

// Agents and dispatch
pub use agents::{Agent, CaddieAgent, CoachAgent, SkillAgent, INVALID_GOLF_INPUT};
pub use dispatch::AgentDispatcher;
