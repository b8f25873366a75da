//! Relay of user messages to the local generation endpoint.
//!
//! [`Assistant`] pairs the [`RetrievalService`] with an [`OllamaClient`]: the
//! retrieval answer for a message becomes context in the prompt, and the
//! model's reply is returned for the UI to speak and display.

pub mod ollama;

use std::sync::Arc;

use serde::Serialize;

use crate::retrieval::{Answer, RetrievalService};
pub use ollama::OllamaClient;

/// Persona line that opens every prompt unless configured otherwise.
pub const DEFAULT_PERSONA: &str =
    "You are Joi, a friendly 3D virtual assistant. Keep responses conversational and under 50 words.";

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("failed to get a response from {endpoint}; make sure Ollama is running locally")]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("generation endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode generation response")]
    Decode(#[source] serde_json::Error),
}

/// Assemble the prompt: persona, optional retrieved facts, then the user message.
pub fn build_prompt(persona: &str, context: Option<&str>, message: &str) -> String {
    match context {
        Some(facts) if !facts.trim().is_empty() => {
            format!("{persona}\nRelevant facts: {facts}\nUser says: {message}")
        }
        _ => format!("{persona} User says: {message}"),
    }
}

/// A model reply plus the retrieval answer used as context (if any).
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Answer>,
}

/// Retrieval-grounded chat.
#[derive(Debug, Clone)]
pub struct Assistant {
    retrieval: Arc<RetrievalService>,
    client: OllamaClient,
    persona: String,
}

impl Assistant {
    pub fn new(retrieval: Arc<RetrievalService>, client: OllamaClient, persona: String) -> Self {
        Self {
            retrieval,
            client,
            persona,
        }
    }

    pub fn retrieval(&self) -> &RetrievalService {
        &self.retrieval
    }

    /// Prompt for `message`, and the retrieval answer folded into it.
    ///
    /// The fallback answer is never used as context.
    pub fn prepare(&self, message: &str, use_context: bool) -> (String, Option<Answer>) {
        let context = use_context
            .then(|| self.retrieval.answer(message))
            .filter(|answer| !answer.is_fallback());
        let prompt = build_prompt(
            &self.persona,
            context.as_ref().map(|a| a.text.as_str()),
            message,
        );
        (prompt, context)
    }

    pub async fn chat(
        &self,
        message: &str,
        use_context: bool,
    ) -> Result<ChatReply, GenerationError> {
        let (prompt, context) = self.prepare(message, use_context);
        tracing::info!(
            model = %self.client.model(),
            grounded = context.is_some(),
            prompt_len = prompt.len(),
            "sending chat prompt"
        );
        let reply = self.client.generate(&prompt).await?;
        Ok(ChatReply { reply, context })
    }
}
