//! CLI `ask` command: answer one question from the knowledge base.

use anyhow::Result;
use joi::config::JoiConfig;

/// Print the contextual answer for `query` and the chunks it came from.
pub fn ask(config: &JoiConfig, query: &str) -> Result<()> {
    let service = super::load_service(config)?;
    let answer = service.answer(query);

    println!("{}", answer.text);
    println!();
    println!("Intent:  {}", answer.intent);
    if answer.sources.is_empty() {
        println!("Sources: none");
        return Ok(());
    }

    println!("Sources: {}", answer.sources.len());
    for source in &answer.sources {
        match source.relevance_score {
            Some(score) => println!("  - {} [{}] (score: {score})", source.id, source.category),
            None => println!("  - {} [{}]", source.id, source.category),
        }
    }

    Ok(())
}
