//! CLI `chat` command: one round trip to the local model.

use anyhow::{Context, Result};
use joi::config::JoiConfig;
use joi::server::AppState;

pub async fn chat(config: &JoiConfig, message: &str, use_context: bool) -> Result<()> {
    let state = AppState::from_config(config)?;

    let reply = state
        .assistant
        .chat(message, use_context)
        .await
        .context("chat request failed")?;

    println!("{}", reply.reply);
    if let Some(context) = reply.context {
        println!();
        println!(
            "(grounded in {} chunk(s), intent: {})",
            context.sources.len(),
            context.intent
        );
    }

    Ok(())
}
