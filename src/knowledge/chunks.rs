//! Conversion of a [`KnowledgeBase`] into searchable text chunks.

use super::types::{Category, Chunk, ChunkMetadata, KnowledgeBase};

/// Turn a camelCase key into lowercase words: `aiMachineLearning` → `ai machine learning`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Build the indexed chunks: personal, one per skill group, one per
/// certification, one per project, then experience.
pub fn create_knowledge_chunks(kb: &KnowledgeBase) -> Vec<Chunk> {
    let first = kb.first_name();
    let mut chunks =
        Vec::with_capacity(2 + kb.skills.len() + kb.certifications.len() + kb.projects.len());

    let personal = &kb.personal;
    chunks.push(Chunk {
        id: "personal".into(),
        category: Category::Personal,
        subcategory: None,
        content: format!(
            "{} is a {}. He specializes in {}. {}",
            personal.name,
            personal.title,
            personal.specialties.join(", "),
            personal.description
        ),
        metadata: ChunkMetadata::Personal(personal.clone()),
    });

    for group in &kb.skills {
        chunks.push(Chunk {
            id: format!("skills-{}", group.key),
            category: Category::Skills,
            subcategory: Some(group.key.clone()),
            content: format!(
                "{first}'s {} skills include: {}",
                humanize_key(&group.key),
                group.items.join(", ")
            ),
            metadata: ChunkMetadata::Skills(group.clone()),
        });
    }

    for (index, cert) in kb.certifications.iter().enumerate() {
        chunks.push(Chunk {
            id: format!("cert-{index}"),
            category: Category::Certifications,
            subcategory: None,
            content: format!(
                "{first} has certification in \"{}\" from {}, earned in {}. Credential ID: {}",
                cert.title, cert.issuer, cert.date, cert.credential_id
            ),
            metadata: ChunkMetadata::Certification(cert.clone()),
        });
    }

    for project in &kb.projects {
        chunks.push(Chunk {
            id: format!("project-{}", project.id),
            category: Category::Projects,
            subcategory: Some(project.category.clone()),
            content: format!(
                "{}: {}. Technologies used: {}. Status: {}. Key highlights: {}",
                project.title,
                project.description,
                project.technologies.join(", "),
                project.status,
                project.highlights.join(", ")
            ),
            metadata: ChunkMetadata::Project(project.clone()),
        });
    }

    chunks.push(Chunk {
        id: "experience".into(),
        category: Category::Experience,
        subcategory: None,
        content: format!(
            "{} His expertise includes: {}",
            kb.experience.summary,
            kb.experience.expertise.join("; ")
        ),
        metadata: ChunkMetadata::Experience(kb.experience.clone()),
    });

    chunks
}

/// The contact chunk, synthesized from the profile links. Not part of the index.
pub fn contact_chunk(kb: &KnowledgeBase) -> Chunk {
    let links = &kb.personal.links;
    Chunk {
        id: "contact".into(),
        category: Category::Contact,
        subcategory: None,
        content: format!(
            "You can reach {} through LinkedIn: {}, GitHub: {}, or CodePen: {}",
            kb.personal.name, links.linkedin, links.github, links.codepen
        ),
        metadata: ChunkMetadata::Contact(links.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn humanize_splits_camel_case() {
        assert_eq!(humanize_key("aiMachineLearning"), "ai machine learning");
        assert_eq!(humanize_key("backendInfrastructure"), "backend infrastructure");
        assert_eq!(humanize_key("frontend"), "frontend");
    }

    #[test]
    fn builtin_chunks_in_order_with_unique_ids() {
        let chunks = create_knowledge_chunks(&KnowledgeBase::builtin());
        assert_eq!(chunks.len(), 1 + 4 + 8 + 4 + 1);
        assert_eq!(chunks[0].id, "personal");
        assert_eq!(chunks[1].id, "skills-aiMachineLearning");
        assert_eq!(chunks[5].id, "cert-0");
        assert_eq!(chunks[13].id, "project-1");
        assert_eq!(chunks.last().unwrap().id, "experience");

        let ids: HashSet<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), chunks.len());
    }

    #[test]
    fn chunk_text_formats() {
        let chunks = create_knowledge_chunks(&KnowledgeBase::builtin());
        assert!(chunks[0]
            .content
            .starts_with("Michael McCullough is a Senior AI Engineer & Software Architect. He specializes in LLM Fine-tuning, RAG Systems,"));
        assert_eq!(
            chunks[4].content,
            "Michael's databases skills include: ChromaDB, Vector Databases, PostgreSQL, MongoDB"
        );
        assert_eq!(
            chunks[5].content,
            "Michael has certification in \"Deep Learning Specialization\" from DeepLearning.AI, earned in Apr 2025. Credential ID: 4FD6OHD6D8UG"
        );
        assert_eq!(chunks[13].subcategory.as_deref(), Some("ai-engineering"));
        assert!(chunks[13].content.starts_with("RAG-Powered Knowledge System: Advanced"));
        assert!(chunks[17].content.contains("His expertise includes: Building production-scale RAG systems with custom embeddings; Fine-tuning"));
    }

    #[test]
    fn contact_chunk_lists_links() {
        let chunk = contact_chunk(&KnowledgeBase::builtin());
        assert_eq!(chunk.category, Category::Contact);
        assert_eq!(
            chunk.content,
            "You can reach Michael McCullough through LinkedIn: https://www.linkedin.com/in/mic-mcc/, GitHub: https://github.com/macrilege, or CodePen: https://codepen.io/macrilege"
        );
    }
}
