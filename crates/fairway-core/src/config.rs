//! Application configuration: load once at startup, pass by reference.
//!
//! Precedence: env `FAIRWAY_CONFIG` path > `config/gateway.toml` > defaults.
//! Provider API keys come from the environment only (`.env` is loaded by the
//! gateway before anything else) and are resolved exactly once per process;
//! there is no lazy lookup anywhere downstream.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prompts;

/// Parameters of one structured-output analysis. Temperature and max_tokens
/// pass through to the provider unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub system_message: String,
    /// Must contain the `{text}` substitution point.
    pub prompt_template: String,
    pub openai_model: String,
    pub groq_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

fn default_sentiment() -> AnalysisConfig {
    AnalysisConfig {
        system_message: prompts::sentiment::SENTIMENT_SYSTEM.to_string(),
        prompt_template: prompts::sentiment::SENTIMENT_USER_TEMPLATE.to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        groq_model: "llama-3.3-70b-versatile".to_string(),
        temperature: 0.2,
        max_tokens: 300,
    }
}

fn default_agent_routing() -> AnalysisConfig {
    AnalysisConfig {
        system_message: prompts::routing::ROUTING_SYSTEM.to_string(),
        prompt_template: prompts::routing::ROUTING_USER_TEMPLATE.to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        groq_model: "llama-3.3-70b-versatile".to_string(),
        temperature: 0.2,
        max_tokens: 600,
    }
}

fn default_lie_analysis() -> AnalysisConfig {
    AnalysisConfig {
        system_message: prompts::skill_lie::LIE_SYSTEM.to_string(),
        prompt_template: prompts::skill_lie::LIE_USER_TEMPLATE.to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        groq_model: "llama-3.3-70b-versatile".to_string(),
        temperature: 0.4,
        max_tokens: 400,
    }
}

fn default_coach_notes() -> AnalysisConfig {
    AnalysisConfig {
        system_message: prompts::coach::NOTES_SYSTEM.to_string(),
        prompt_template: prompts::coach::NOTES_USER_TEMPLATE.to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        groq_model: "llama-3.3-70b-versatile".to_string(),
        temperature: 0.5,
        max_tokens: 300,
    }
}

fn default_coach_tips() -> AnalysisConfig {
    AnalysisConfig {
        system_message: prompts::coach::TIPS_SYSTEM.to_string(),
        prompt_template: prompts::coach::TIPS_USER_TEMPLATE.to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        groq_model: "llama-3.3-70b-versatile".to_string(),
        temperature: 0.5,
        max_tokens: 300,
    }
}

/// Global application configuration (gateway + analyses). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity, echoed by the root route.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// LLM mode: "mock" (deterministic, offline) or "live".
    pub llm_mode: String,
    /// Context string injected into every AgentConfig.
    pub user_context: String,
    /// Allowed CORS origins. Empty = CORS layer disabled.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_sentiment")]
    pub sentiment: AnalysisConfig,
    #[serde(default = "default_agent_routing")]
    pub agent_routing: AnalysisConfig,
    #[serde(default = "default_lie_analysis")]
    pub lie_analysis: AnalysisConfig,
    #[serde(default = "default_coach_notes")]
    pub coach_notes: AnalysisConfig,
    #[serde(default = "default_coach_tips")]
    pub coach_tips: AnalysisConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "Fairway Gateway".to_string(),
            port: 8000,
            llm_mode: "mock".to_string(),
            user_context: "Golf assistant".to_string(),
            cors_origins: Vec::new(),
            sentiment: default_sentiment(),
            agent_routing: default_agent_routing(),
            lie_analysis: default_lie_analysis(),
            coach_notes: default_coach_notes(),
            coach_tips: default_coach_tips(),
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `FAIRWAY_CONFIG`
    /// path > `config/gateway.toml` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("FAIRWAY_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Fairway Gateway")?
            .set_default("port", 8000_i64)?
            .set_default("llm_mode", "mock")?
            .set_default("user_context", "Golf assistant")?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("FAIRWAY").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}

// -----------------------------------------------------------------------------
// Provider credentials
// -----------------------------------------------------------------------------

/// API keys for the two interchangeable chat-completion providers, resolved
/// once at process start. A missing key is not an error until a live call
/// actually selects that provider.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Reads `OPENAI_API_KEY` and `GROQ_API_KEY`. Blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env_key("OPENAI_API_KEY"),
            groq_api_key: env_key("GROQ_API_KEY"),
        }
    }
}

fn env_key(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_templates_carry_the_substitution_point() {
        let config = CoreConfig::default();
        for analysis in [
            &config.sentiment,
            &config.agent_routing,
            &config.lie_analysis,
            &config.coach_notes,
            &config.coach_tips,
        ] {
            assert!(
                analysis.prompt_template.contains("{text}"),
                "template without {{text}}: {}",
                analysis.prompt_template
            );
        }
    }

    #[test]
    fn defaults_match_the_documented_identity() {
        let config = CoreConfig::default();
        assert_eq!(config.app_name, "Fairway Gateway");
        assert_eq!(config.port, 8000);
        assert_eq!(config.llm_mode, "mock");
        assert!(config.cors_origins.is_empty());
    }
}
