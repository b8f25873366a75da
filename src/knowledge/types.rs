//! Knowledge base records and the text chunks derived from them.
//!
//! [`KnowledgeBase`] is the hand-authored profile of one person. [`Chunk`] is
//! one unit of searchable text, tagged with a [`Category`] and carrying a typed
//! back-reference ([`ChunkMetadata`]) to the record it was built from.

use serde::{Deserialize, Serialize};

/// A static profile of one person: who they are, what they know, what they built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub personal: Personal,
    /// Skill groups in display order. Order is significant: chunks follow it.
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub experience: Experience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub description: String,
    pub links: Links,
}

/// Public profile URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    pub linkedin: String,
    pub codepen: String,
    pub github: String,
}

/// A named group of skills. `key` is the camelCase group identifier
/// (e.g. `aiMachineLearning`) and doubles as the chunk subcategory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub key: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub verification_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: String,
    pub category: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub summary: String,
    #[serde(default)]
    pub expertise: Vec<String>,
}

impl KnowledgeBase {
    /// First whitespace-separated word of the person's name.
    pub fn first_name(&self) -> &str {
        self.personal
            .name
            .split_whitespace()
            .next()
            .unwrap_or(self.personal.name.as_str())
    }
}

/// The category a chunk is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Personal,
    Skills,
    Certifications,
    Projects,
    Experience,
    /// Synthesized on demand from the profile links; never indexed.
    Contact,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Personal,
        Self::Skills,
        Self::Certifications,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Self::Personal),
            "skills" => Ok(Self::Skills),
            "certifications" => Ok(Self::Certifications),
            "projects" => Ok(Self::Projects),
            "experience" => Ok(Self::Experience),
            "contact" => Ok(Self::Contact),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

/// Back-reference from a chunk to the record it was built from.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChunkMetadata {
    Personal(Personal),
    Skills(SkillGroup),
    Certification(Certification),
    Project(Project),
    Experience(Experience),
    Contact(Links),
}

impl ChunkMetadata {
    /// Title of the backing record, for records that have one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Certification(c) => Some(&c.title),
            Self::Project(p) => Some(&p.title),
            _ => None,
        }
    }
}

/// One static unit of knowledge text.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    /// Unique within a knowledge base (e.g. `cert-3`, `skills-frontend`).
    pub id: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub content: String,
    pub metadata: ChunkMetadata,
}
