//! Server entry points: MCP over stdio, and an HTTP JSON API for chat UIs.
//!
//! Provides [`serve_stdio`] and [`serve_http`], which wire the knowledge base,
//! retrieval service, and generation client into a running server. The HTTP
//! routes are built by [`build_api_router`] so they can be exercised without a
//! socket.

use crate::config::JoiConfig;
use crate::generation::{Assistant, ChatReply, GenerationError, OllamaClient};
use crate::knowledge::{Category, Chunk};
use crate::retrieval::{clamp_limit, Answer, Hit, RetrievalService, RetrievalSettings};
use crate::tools::JoiTools;
use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rmcp::ServiceExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub retrieval: Arc<RetrievalService>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    /// Load the knowledge base, build the index, and create the generation client.
    pub fn from_config(config: &JoiConfig) -> Result<Self> {
        let knowledge = config.load_knowledge()?;
        let retrieval = Arc::new(RetrievalService::new(
            knowledge,
            RetrievalSettings::from(&config.retrieval),
        ));

        let client = OllamaClient::new(&config.generation)
            .context("failed to create generation client")?;
        tracing::info!(
            endpoint = %client.endpoint(),
            model = %client.model(),
            "generation client ready"
        );
        let assistant = Arc::new(Assistant::new(
            Arc::clone(&retrieval),
            client,
            config.generation.persona.clone(),
        ));

        Ok(Self {
            retrieval,
            assistant,
        })
    }
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: JoiConfig) -> Result<()> {
    tracing::info!("starting Joi MCP server on stdio");

    let state = AppState::from_config(&config)?;

    let tools = JoiTools::new(state.retrieval, state.assistant);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running on stdio");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the HTTP API, with the MCP Streamable HTTP service nested at `/mcp`.
pub async fn serve_http(config: JoiConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(addr = %bind_addr, "starting Joi HTTP server");

    let state = AppState::from_config(&config)?;
    let mcp_state = state.clone();

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || {
            Ok(JoiTools::new(
                mcp_state.retrieval.clone(),
                mcp_state.assistant.clone(),
            ))
        },
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = build_api_router(state).nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "listening at http://{bind_addr} (MCP at /mcp)");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for ctrl-c");
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}

// ── HTTP API ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub results: Vec<Hit<'a>>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ChunksQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub use_context: Option<bool>,
}

/// Error body: `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        tracing::warn!(error = %err, "generation failed");
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// Build the HTTP routes over shared state.
pub fn build_api_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/ask", post(ask))
        .route("/api/search", post(search))
        .route("/api/chunks", get(chunks))
        .route("/api/chat", post(chat))
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<Answer>, ApiError> {
    if req.query.trim().is_empty() {
        return Err(ApiError::bad_request("query must not be empty"));
    }
    let answer = state.retrieval.answer(&req.query);
    tracing::info!(query = %req.query, intent = %answer.intent, "ask");
    Ok(Json(answer))
}

async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let limit = clamp_limit(req.limit, state.retrieval.settings().search_limit);
    let results = state.retrieval.search(&req.query, limit);
    let total = results.len();
    // Hits borrow from `state`, so serialize before it is dropped.
    let body = serde_json::to_value(SearchResponse { results, total })
        .map_err(|e| ApiError::internal(format!("serialization failed: {e}")))?;
    Ok(Json(body))
}

async fn chunks(
    State(state): State<AppState>,
    Query(params): Query<ChunksQuery>,
) -> Result<Response, ApiError> {
    let category = params
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(ApiError::bad_request)?;
    let chunks: Vec<&Chunk> = state.retrieval.chunks_in(category);
    Ok(Json(chunks).into_response())
}

async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::bad_request("message must not be empty"));
    }
    let reply = state
        .assistant
        .chat(&req.message, req.use_context.unwrap_or(true))
        .await?;
    Ok(Json(reply))
}
