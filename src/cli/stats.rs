use anyhow::Result;
use joi::config::JoiConfig;

/// Display index statistics in the terminal.
pub fn stats(config: &JoiConfig) -> Result<()> {
    let service = super::load_service(config)?;
    let stats = service.stats();

    println!("Knowledge Index");
    println!("{}", "=".repeat(40));
    println!("  Subject:             {}", service.knowledge().personal.name);
    match config.resolved_knowledge_path() {
        Some(path) => println!("  Source:              {}", path.display()),
        None => println!("  Source:              built-in"),
    }
    println!("  Total chunks:        {}", stats.total_chunks);
    println!("  Vocabulary:          {} keywords", stats.vocabulary_size);
    println!();

    println!("By Category:");
    for (category, count) in &stats.by_category {
        println!("  {:<16} {}", category, count);
    }

    Ok(())
}
