//! MCP `ask_about` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `ask_about` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AskAboutParams {
    #[schemars(description = "Natural language question about the person in the knowledge base")]
    pub query: String,
}
