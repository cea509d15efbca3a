//! Axum-based API gateway: HTTP entry point for the Fairway golf assistant.
//!
//! Provider API keys live in this process only (`.env`, loaded before
//! anything else); clients never send or receive credentials. Every request
//! runs a self-contained agent/analysis pipeline with no shared mutable state.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fairway_core::{
    AgentDispatcher, AgentError, AgentResponse, AgentType, AgentTypeAnalysis, AgentTypeService,
    CoreConfig, ProviderCredentials, SentimentAnalysis, SentimentService, UserInput,
};

#[derive(Clone)]
struct AppState {
    config: Arc<CoreConfig>,
    dispatcher: Arc<AgentDispatcher>,
    sentiment: Arc<SentimentService>,
    agent_types: Arc<AgentTypeService>,
}

impl AppState {
    fn new(config: CoreConfig, credentials: ProviderCredentials) -> Self {
        let config = Arc::new(config);
        let dispatcher = Arc::new(AgentDispatcher::new(Arc::clone(&config), credentials));
        let sentiment = dispatcher.sentiment();
        let agent_types = dispatcher.agent_types();
        Self {
            config,
            dispatcher,
            sentiment,
            agent_types,
        }
    }
}

/// Error envelope at the transport boundary. Client errors keep their status;
/// every analysis failure flattens to a generic 500 carrying the original
/// message (the kind stays differentiated inside `AgentError`).
struct ApiError(AgentError);

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AgentError::InvalidInput(_) | AgentError::UnknownAgentType(_) => {
                StatusCode::BAD_REQUEST
            }
            AgentError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let detail = self.0.to_string();
        tracing::error!(target: "fairway::gateway", status = %status, "{}", detail);
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": format!("Welcome to {}", state.config.app_name)
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Advisory analysis: dispatches to the Caddie agent, one response per
/// sub-analysis.
async fn analyze(
    State(state): State<AppState>,
    Json(user_input): Json<UserInput>,
) -> Result<Json<Vec<AgentResponse>>, ApiError> {
    let responses = state
        .dispatcher
        .dispatch(AgentType::Caddie, user_input)
        .await?;
    Ok(Json(responses))
}

async fn agent_type_analysis(
    State(state): State<AppState>,
    Json(user_input): Json<UserInput>,
) -> Result<Json<AgentTypeAnalysis>, ApiError> {
    user_input.validate()?;
    let analysis = state.agent_types.analyze(&user_input).await?;
    Ok(Json(analysis))
}

async fn sentiment_analysis(
    State(state): State<AppState>,
    Json(user_input): Json<UserInput>,
) -> Result<Json<SentimentAnalysis>, ApiError> {
    user_input.validate()?;
    let analysis = state.sentiment.analyze(&user_input.content).await?;
    Ok(Json(analysis))
}

fn build_app(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(root))
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(analyze))
        .route("/api/v1/agent_type_analysis", post(agent_type_analysis))
        .route("/api/v1/sentiment_analysis", post(sentiment_analysis));

    if !state.config.cors_origins.is_empty() {
        let origins: Vec<HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(tower_http::cors::Any);
        app = app.layer(cors);
    }

    app.with_state(state)
}

#[tokio::main]
async fn main() {
    // Load .env first: provider API keys stay in this process only.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[fairway-gateway] .env not loaded: {} (using system environment)",
            e
        );
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CoreConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[fairway-gateway] config load failed: {}", e);
            std::process::exit(1);
        }
    };

    let credentials = ProviderCredentials::from_env();
    if config.llm_mode == "live"
        && credentials.openai_api_key.is_none()
        && credentials.groq_api_key.is_none()
    {
        eprintln!(
            "[fairway-gateway] Hint: set OPENAI_API_KEY and/or GROQ_API_KEY in .env for live mode."
        );
    }

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        target: "fairway::gateway",
        "Starting {} on {} (llm_mode: {})",
        config.app_name,
        addr,
        config.llm_mode
    );

    let state = AppState::new(config, credentials);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
