pub mod ask_about;
pub mod chat;
pub mod list_chunks;
pub mod search_knowledge;

use ask_about::AskAboutParams;
use chat::ChatParams;
use list_chunks::ListChunksParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use search_knowledge::SearchKnowledgeParams;
use std::sync::Arc;

use crate::generation::Assistant;
use crate::knowledge::Category;
use crate::retrieval::{clamp_limit, RetrievalService};

/// The Joi MCP tool handler. Holds the shared retrieval service and assistant
/// and exposes all MCP tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct JoiTools {
    tool_router: ToolRouter<Self>,
    retrieval: Arc<RetrievalService>,
    assistant: Arc<Assistant>,
}

#[tool_router]
impl JoiTools {
    pub fn new(retrieval: Arc<RetrievalService>, assistant: Arc<Assistant>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            retrieval,
            assistant,
        }
    }

    /// Answer a question about the person in the knowledge base.
    #[tool(description = "Answer a question about the person in the knowledge base (skills, projects, certifications, experience, contact). Returns the answer text, the routed intent, and the source chunk ids.")]
    async fn ask_about(
        &self,
        Parameters(params): Parameters<AskAboutParams>,
    ) -> Result<String, String> {
        if params.query.trim().is_empty() {
            return Err("query must not be empty".into());
        }

        let answer = self.retrieval.answer(&params.query);
        tracing::info!(
            query = %params.query,
            intent = %answer.intent,
            sources = answer.sources.len(),
            "ask_about called"
        );

        serde_json::to_string(&answer).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Ranked keyword search over the knowledge chunks.
    #[tool(description = "Keyword search over knowledge chunks. Results are ranked by the number of distinct query keywords each chunk contains.")]
    async fn search_knowledge(
        &self,
        Parameters(params): Parameters<SearchKnowledgeParams>,
    ) -> Result<String, String> {
        let limit = clamp_limit(params.limit, self.retrieval.settings().search_limit);
        let hits = self.retrieval.search(&params.query, limit);
        tracing::info!(query = %params.query, limit, hits = hits.len(), "search_knowledge called");

        serde_json::to_string(&serde_json::json!({
            "results": hits,
            "total": hits.len(),
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// List the indexed knowledge chunks.
    #[tool(description = "List indexed knowledge chunks, optionally filtered by category.")]
    async fn list_chunks(
        &self,
        Parameters(params): Parameters<ListChunksParams>,
    ) -> Result<String, String> {
        let category = params
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?;
        let chunks = self.retrieval.chunks_in(category);
        tracing::info!(category = ?category, count = chunks.len(), "list_chunks called");

        serde_json::to_string(&chunks).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Relay a message to the local LLM, grounded in retrieved knowledge.
    #[tool(description = "Send a message to the assistant. Retrieved facts are added to the prompt unless use_context=false; the reply comes from the local Ollama model.")]
    async fn chat(
        &self,
        Parameters(params): Parameters<ChatParams>,
    ) -> Result<String, String> {
        if params.message.trim().is_empty() {
            return Err("message must not be empty".into());
        }

        let reply = self
            .assistant
            .chat(&params.message, params.use_context.unwrap_or(true))
            .await
            .map_err(|e| format!("chat failed: {e}"))?;

        serde_json::to_string(&reply).map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for JoiTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "Joi answers questions about one person from a static knowledge base. Use \
                 ask_about for questions, search_knowledge for ranked keyword matches, and \
                 chat to talk to the local model with retrieved facts as context."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
