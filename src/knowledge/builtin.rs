//! The built-in knowledge base: Michael McCullough's professional profile.

use super::types::{
    Certification, Experience, KnowledgeBase, Links, Personal, Project, SkillGroup,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn cert(title: &str, issuer: &str, date: &str, credential_id: &str, url: &str) -> Certification {
    Certification {
        title: title.into(),
        issuer: issuer.into(),
        date: date.into(),
        credential_id: credential_id.into(),
        verification_url: url.into(),
    }
}

impl KnowledgeBase {
    /// The in-source profile served when no knowledge file is configured.
    pub fn builtin() -> Self {
        Self {
            personal: Personal {
                name: "Michael McCullough".into(),
                title: "Senior AI Engineer & Software Architect".into(),
                specialties: strings(&[
                    "LLM Fine-tuning",
                    "RAG Systems",
                    "ML Infrastructure",
                    "AI-Powered Applications",
                    "Front-end Development",
                    "AI model fine-tuning",
                ]),
                description: "Senior Software Engineer Lead & AI Engineer specializing in \
                              Front-end, AI model fine-tuning, RAG systems, and infrastructure"
                    .into(),
                links: Links {
                    linkedin: "https://www.linkedin.com/in/mic-mcc/".into(),
                    codepen: "https://codepen.io/macrilege".into(),
                    github: "https://github.com/macrilege".into(),
                },
            },
            skills: vec![
                SkillGroup {
                    key: "aiMachineLearning".into(),
                    items: strings(&[
                        "LLM Fine-tuning & Optimization",
                        "RAG Systems & Vector Databases",
                        "Transformer Architectures",
                        "PyTorch & TensorFlow",
                        "Hugging Face Ecosystem",
                        "Model Deployment & Serving",
                        "Custom embedding fine-tuning",
                        "Multi-modal retrieval",
                        "Production-scale deployment",
                    ]),
                },
                SkillGroup {
                    key: "backendInfrastructure".into(),
                    items: strings(&[
                        "Python & FastAPI",
                        "Node.js & Hono Framework",
                        "Distributed Training",
                        "Cloud ML Platforms",
                        "Docker & Kubernetes",
                        "API Development",
                    ]),
                },
                SkillGroup {
                    key: "frontend".into(),
                    items: strings(&[
                        "React",
                        "TypeScript",
                        "JavaScript",
                        "HTML/CSS",
                        "UI/UX Design",
                        "Three.js",
                        "WebGL",
                        "Real-time AI integration",
                        "Responsive AI interfaces",
                    ]),
                },
                SkillGroup {
                    key: "databases".into(),
                    items: strings(&["ChromaDB", "Vector Databases", "PostgreSQL", "MongoDB"]),
                },
            ],
            certifications: vec![
                cert(
                    "Deep Learning Specialization",
                    "DeepLearning.AI",
                    "Apr 2025",
                    "4FD6OHD6D8UG",
                    "https://www.coursera.org/account/accomplishments/specialization/4FD6OHD6D8UG",
                ),
                cert(
                    "Principles of UX/UI Design",
                    "Meta",
                    "Apr 2025",
                    "A3Q6RTHSATYW",
                    "https://www.coursera.org/account/accomplishments/verify/A3Q6RTHSATYW",
                ),
                cert(
                    "Programming in Python",
                    "Meta",
                    "Apr 2025",
                    "7YVBKIWRBYI1",
                    "https://www.coursera.org/account/accomplishments/verify/7YVBKIWRBYI1",
                ),
                cert(
                    "Python Programming Fundamentals",
                    "Microsoft",
                    "Apr 2025",
                    "601VP0FQQVPP",
                    "https://www.coursera.org/account/accomplishments/records/601VP0FQQVPP",
                ),
                cert(
                    "Google AI Essentials",
                    "Google",
                    "Mar 2025",
                    "86T245NTBQ1Z",
                    "https://www.coursera.org/account/accomplishments/records/86T245NTBQ1Z",
                ),
                cert(
                    "HTML and CSS in depth",
                    "Meta",
                    "Mar 2025",
                    "Q6P4FRC5JU0R",
                    "https://www.coursera.org/account/accomplishments/verify/Q6P4FRC5JU0R",
                ),
                cert(
                    "Programming with JavaScript",
                    "Meta",
                    "Mar 2025",
                    "USJFKKJM4JSR",
                    "https://www.coursera.org/account/accomplishments/verify/USJFKKJM4JSR",
                ),
                cert(
                    "HTML/CSS and React",
                    "TestDome",
                    "Nov 2019",
                    "5c23b5965ac84030ad532921fddc0a7d",
                    "https://www.testdome.com/cert/5c23b5965ac84030ad532921fddc0a7d",
                ),
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "RAG-Powered Knowledge System".into(),
                    description: "Advanced retrieval-augmented generation system with fine-tuned \
                                  embeddings and optimized vector search"
                        .into(),
                    technologies: strings(&[
                        "Python",
                        "PyTorch",
                        "LangChain",
                        "ChromaDB",
                        "FastAPI",
                    ]),
                    status: "live".into(),
                    category: "ai-engineering".into(),
                    highlights: strings(&[
                        "Custom embedding fine-tuning",
                        "Multi-modal retrieval",
                        "Production-scale deployment",
                    ]),
                    link: None,
                },
                Project {
                    id: 2,
                    title: "Custom LLM Fine-tuning Pipeline".into(),
                    description: "End-to-end pipeline for domain-specific model fine-tuning with \
                                  automated evaluation and deployment"
                        .into(),
                    technologies: strings(&[
                        "Transformers",
                        "LoRA/QLoRA",
                        "Weights & Biases",
                        "Docker",
                        "MLOps",
                    ]),
                    status: "live".into(),
                    category: "ai-engineering".into(),
                    highlights: strings(&[
                        "Parameter-efficient fine-tuning",
                        "Automated evaluation",
                        "CI/CD for ML models",
                    ]),
                    link: None,
                },
                Project {
                    id: 3,
                    title: "Intelligent AI Chatbot Platform".into(),
                    description: "Multi-modal conversational AI with custom knowledge bases, \
                                  memory, and adaptive response generation"
                        .into(),
                    technologies: strings(&[
                        "Ollama",
                        "OpenAI API",
                        "LangChain",
                        "React",
                        "WebSocket",
                        "Voice APIs",
                    ]),
                    status: "live".into(),
                    category: "ai-chatbots".into(),
                    highlights: strings(&[
                        "Context-aware conversations",
                        "Custom knowledge integration",
                        "Real-time streaming responses",
                        "Memory persistence",
                    ]),
                    link: None,
                },
                Project {
                    id: 4,
                    title: "AI-Powered Web Applications".into(),
                    description: "Modern React interfaces integrated with AI models for \
                                  intelligent user experiences"
                        .into(),
                    technologies: strings(&[
                        "React",
                        "TypeScript",
                        "OpenAI API",
                        "Cloudflare Workers",
                    ]),
                    status: "ongoing".into(),
                    category: "ai-applications".into(),
                    highlights: strings(&[
                        "Real-time AI integration",
                        "Responsive AI interfaces",
                        "Creative AI demos",
                    ]),
                    link: Some("https://codepen.io/macrilege".into()),
                },
            ],
            experience: Experience {
                summary: "Michael is a Senior Software Engineer Lead & AI Engineer with extensive \
                          experience in AI/ML systems, particularly in LLM fine-tuning, RAG \
                          systems, and AI-powered applications. He specializes in both front-end \
                          development and backend AI infrastructure."
                    .into(),
                expertise: strings(&[
                    "Building production-scale RAG systems with custom embeddings",
                    "Fine-tuning large language models for domain-specific applications",
                    "Developing AI-powered web applications with React and TypeScript",
                    "Implementing MLOps pipelines for model training and deployment",
                    "Creating intelligent chatbot platforms with memory and context awareness",
                    "Optimizing vector databases and search systems for AI applications",
                ]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profile_shape() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.first_name(), "Michael");
        assert_eq!(kb.personal.specialties.len(), 6);
        assert_eq!(kb.skills.len(), 4);
        assert_eq!(kb.certifications.len(), 8);
        assert_eq!(kb.projects.len(), 4);
        assert_eq!(kb.experience.expertise.len(), 6);
    }

    #[test]
    fn line_continuations_keep_single_spaces() {
        let kb = KnowledgeBase::builtin();
        assert!(!kb.experience.summary.contains("  "));
        assert!(!kb.personal.description.contains("  "));
        assert!(kb.projects.iter().all(|p| !p.description.contains("  ")));
    }
}
