use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListChunksParams {
    #[schemars(
        description = "Optional category filter: 'personal', 'skills', 'certifications', 'projects', 'experience'"
    )]
    pub category: Option<String>,
}
