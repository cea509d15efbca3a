//! Error kinds for the agent pipeline.
//!
//! The transport boundary flattens everything below `InvalidInput` /
//! `UnknownAgentType` into a generic server error, but the original kind is
//! preserved here so future handling can differentiate without an API change.

use thiserror::Error;

pub type AgentResult<T> = Result<T, AgentError>;

/// Errors raised anywhere between the request boundary and the LLM provider.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Malformed `UserInput`, rejected before any agent is constructed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Routing tag with no registered agent implementation.
    #[error("unknown agent type: {0}")]
    UnknownAgentType(String),

    /// An analysis call failed (network, auth, or schema decode).
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Failure modes of a single structured-output call. Never retried.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The selected provider has no API key in process configuration.
    #[error("missing API key: set {0}")]
    MissingCredentials(&'static str),

    /// The prompt template lacks the `{text}` substitution point.
    #[error("prompt template is missing the {{text}} placeholder")]
    Template,

    /// Transport-level failure (connect, timeout, TLS).
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Provider answered 2xx but the reply carried no choices.
    #[error("provider reply had no choices")]
    EmptyReply,

    /// The reply text did not deserialize into the target schema.
    #[error("reply did not match the target schema: {0}")]
    Decode(#[from] serde_json::Error),

    /// The reply deserialized but violated a declared field constraint.
    #[error("schema constraint violated: {0}")]
    Schema(String),
}
