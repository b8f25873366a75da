use anyhow::Result;
use joi::config::JoiConfig;
use joi::retrieval::clamp_limit;

/// Run a ranked keyword search from the terminal.
pub fn search(config: &JoiConfig, query: &str, limit: Option<usize>) -> Result<()> {
    let service = super::load_service(config)?;
    let limit = clamp_limit(limit, service.settings().search_limit);
    let hits = service.search(query, limit);

    if hits.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} result(s)\n", hits.len());

    for (i, hit) in hits.iter().enumerate() {
        println!(
            "  {}. [{}] {} (score: {})",
            i + 1,
            hit.chunk.category,
            hit.chunk.id,
            hit.relevance_score.unwrap_or(0),
        );
        println!("     {}", super::preview(&hit.chunk.content, 120));
        println!();
    }

    Ok(())
}
