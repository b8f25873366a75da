mod helpers;

use helpers::builtin_service;
use joi::knowledge::Category;
use joi::retrieval::router::Intent;

const FALLBACK: &str = "I don't have specific information about that. You can ask me about Michael's skills, projects, certifications, or experience!";

#[test]
fn certification_question_returns_all_certifications() {
    let service = builtin_service();
    let outcome = service.process_query("What certifications does Michael have?");

    assert_eq!(outcome.intent, Intent::Certifications);
    assert_eq!(outcome.hits.len(), 8);
    assert!(outcome
        .hits
        .iter()
        .all(|h| h.chunk.category == Category::Certifications));

    let answer = service.answer("What certifications does Michael have?");
    assert_eq!(answer.category, Some(Category::Certifications));
    assert!(answer.text.starts_with(
        "Regarding certifications, Michael has certification in \"Deep Learning Specialization\""
    ));
}

#[test]
fn rag_project_question_tops_with_rag_project() {
    let service = builtin_service();
    let outcome = service.process_query("Tell me about Michael's RAG project");

    assert_eq!(outcome.intent, Intent::Projects);
    let top = outcome.hits.first().expect("at least one hit");
    assert!(top.chunk.metadata.title().unwrap().contains("RAG"));

    let answer = service.answer("Tell me about Michael's RAG project");
    assert!(answer
        .text
        .starts_with("One of Michael's notable projects is RAG-Powered Knowledge System. RAG-Powered Knowledge System: Advanced"));
}

#[test]
fn no_overlap_returns_fallback_verbatim() {
    let service = builtin_service();
    let outcome = service.process_query("asdkjasd");
    assert_eq!(outcome.intent, Intent::Search);
    assert!(outcome.hits.is_empty());
    assert_eq!(service.generate_contextual_response(&outcome.hits), FALLBACK);
    assert_eq!(service.answer("asdkjasd").text, FALLBACK);
}

#[test]
fn every_vocabulary_token_finds_ordered_hits() {
    let service = builtin_service();
    for token in service.index().vocabulary() {
        let hits = service.search(&format!("tell {token} please"), 20);
        assert!(!hits.is_empty(), "token {token} should match");
        let scores: Vec<usize> = hits.iter().map(|h| h.relevance_score.unwrap()).collect();
        assert!(
            scores.windows(2).all(|w| w[0] >= w[1]),
            "scores not ordered for {token}: {scores:?}"
        );
    }
}

#[test]
fn multi_word_search_orders_by_distinct_hits() {
    let service = builtin_service();
    let hits = service.search("typescript react", 5);
    let ids: Vec<&str> = hits.iter().map(|h| h.chunk.id.as_str()).collect();
    // Three chunks mention both words, in first-hit order, then single-word matches.
    assert_eq!(
        ids,
        vec!["skills-frontend", "project-4", "experience", "cert-7", "project-3"]
    );
    let scores: Vec<usize> = hits.iter().map(|h| h.relevance_score.unwrap()).collect();
    assert_eq!(scores, vec![2, 2, 2, 1, 1]);
}

#[test]
fn repeated_query_words_count_once() {
    let service = builtin_service();
    let once = service.search("kubernetes", 5);
    let thrice = service.search("kubernetes kubernetes Kubernetes!", 5);
    assert_eq!(once.len(), 1);
    assert_eq!(once[0].chunk.id, "skills-backendInfrastructure");
    assert_eq!(thrice[0].relevance_score, Some(1));
}

#[test]
fn search_routed_query_uses_keyword_ranking() {
    let service = builtin_service();
    let outcome = service.process_query("What is Michael's specialization?");
    assert_eq!(outcome.intent, Intent::Search);
    assert_eq!(outcome.hits.len(), 5);
    assert_eq!(outcome.hits[0].chunk.id, "cert-0");
    assert_eq!(outcome.hits[0].relevance_score, Some(2));
    assert_eq!(outcome.hits[1].chunk.id, "personal");
}

#[test]
fn repeated_calls_are_identical() {
    let service = builtin_service();
    for query in [
        "Does Michael know React?",
        "Show me Michael's LLM projects",
        "chromadb",
        "asdkjasd",
    ] {
        let first = serde_json::to_value(service.answer(query)).unwrap();
        let second = serde_json::to_value(service.answer(query)).unwrap();
        assert_eq!(first, second, "answer changed for {query}");
    }
}

#[test]
fn search_answer_phrased_by_top_category() {
    let service = builtin_service();
    let answer = service.answer("chromadb");
    assert_eq!(answer.intent, Intent::Search);
    assert_eq!(answer.sources.len(), 2);
    assert_eq!(answer.sources[0].id, "skills-databases");
    assert_eq!(answer.sources[0].relevance_score, Some(1));
    assert!(answer
        .text
        .starts_with("Michael has extensive expertise in databases. Michael's databases skills include: ChromaDB"));
    // Context joins both hits with a single space.
    assert!(answer.text.contains("MongoDB RAG-Powered Knowledge System:"));
}
