//! MCP `search_knowledge` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `search_knowledge` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchKnowledgeParams {
    /// Free-text query. Matched by keyword, no intent routing.
    #[schemars(description = "Free-text query matched against indexed keywords")]
    pub query: String,

    /// Maximum number of results (1–20). Defaults to the configured limit.
    #[schemars(description = "Maximum number of results to return (1-20). Defaults to 5.")]
    pub limit: Option<usize>,
}
