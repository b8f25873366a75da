//! CLI `chunks` command: list indexed knowledge chunks.

use anyhow::Result;
use joi::config::JoiConfig;
use joi::knowledge::Category;

pub fn chunks(config: &JoiConfig, category: Option<&str>) -> Result<()> {
    let category = category
        .map(str::parse::<Category>)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let service = super::load_service(config)?;
    let chunks = service.chunks_in(category);

    for chunk in &chunks {
        let sub = chunk
            .subcategory
            .as_deref()
            .map(|s| format!("/{s}"))
            .unwrap_or_default();
        println!("{:<28} {}{}", chunk.id, chunk.category, sub);
        println!("    {}", super::preview(&chunk.content, 100));
    }
    println!();
    println!("{} chunk(s)", chunks.len());

    Ok(())
}
