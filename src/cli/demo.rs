//! CLI `demo` command: run a fixed set of questions through the retrieval pipeline.

use anyhow::Result;
use joi::config::JoiConfig;

/// The demonstration questions, phrased for the built-in profile.
pub const DEMO_QUERIES: [&str; 10] = [
    "What are Michael's AI skills?",
    "Tell me about Michael's projects",
    "What certifications does Michael have?",
    "How can I contact Michael?",
    "What is Michael's experience with RAG systems?",
    "Does Michael know React?",
    "What programming languages does Michael use?",
    "Tell me about Michael's background",
    "What is Michael's specialization?",
    "Show me Michael's LLM projects",
];

pub fn demo(config: &JoiConfig) -> Result<()> {
    let service = super::load_service(config)?;
    let name = service.knowledge().first_name().to_string();

    println!("Retrieval demo for {name}'s knowledge base");
    println!("{}", "=".repeat(42));

    for (i, query) in DEMO_QUERIES.iter().enumerate() {
        let outcome = service.process_query(query);
        let response = service.generate_contextual_response(&outcome.hits);

        println!();
        println!("{}. Query: \"{query}\"", i + 1);
        println!("   Response: {response}");
        println!("   Sources: {} knowledge chunks found", outcome.hits.len());

        if let Some(top) = outcome.hits.first() {
            let score = top
                .relevance_score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".into());
            println!("   Top Match: {} (score: {score})", top.chunk.category);
        }
    }

    println!();
    println!("Demo complete. Ask about {name}'s skills, projects, certifications, contact links, or background.");
    Ok(())
}
