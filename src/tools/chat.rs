//! MCP `chat` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `chat` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChatParams {
    #[schemars(description = "The user's message to the assistant")]
    pub message: String,

    /// Whether to ground the prompt in retrieved knowledge. Defaults to true.
    #[schemars(
        description = "If true (default), facts retrieved for the message are added to the prompt"
    )]
    pub use_context: Option<bool>,
}
