//! Skill Extractor: vocabulary lookup over resume text, optionally enriched
//! with proper-noun phrases from model output.
//!
//! Deduplication is keyed on the lowercase form. The first spelling seen is
//! the one returned, so vocabulary hits always come back in canonical lowercase.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "sql",
    "nosql",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "machine learning",
    "ai",
    "deep learning",
    "tensorflow",
    "pytorch",
    "html",
    "css",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "rest api",
    "graphql",
    "microservices",
    "agile",
    "scrum",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "analytical",
    "creative",
    "adaptable",
    "time management",
    "collaboration",
    "critical thinking",
    "decision making",
];

// Runs of Capitalized Words, e.g. "Apache Kafka", "Terraform".
static PROPER_NOUN_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("valid proper noun regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub total_count: usize,
}

/// Insertion-ordered list that rejects case-insensitive duplicates.
#[derive(Default)]
struct DedupList {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl DedupList {
    fn contains(&self, value: &str) -> bool {
        self.seen.contains(&value.to_lowercase())
    }

    fn push(&mut self, value: &str) {
        if self.seen.insert(value.to_lowercase()) {
            self.items.push(value.to_string());
        }
    }
}

/// Extracts technical and soft skills from `text`. When `ai_text` is given,
/// capitalized phrases from it are folded into the technical set.
pub fn extract_skills(text: &str, ai_text: Option<&str>) -> SkillSet {
    let lower = text.to_lowercase();

    let mut technical = DedupList::default();
    for skill in TECHNICAL_SKILLS.iter().filter(|s| lower.contains(*s)) {
        technical.push(skill);
    }

    let mut soft = DedupList::default();
    for skill in SOFT_SKILLS.iter().filter(|s| lower.contains(*s)) {
        soft.push(skill);
    }

    if let Some(ai_text) = ai_text {
        for m in PROPER_NOUN_PHRASE.find_iter(ai_text) {
            if !technical.contains(m.as_str()) {
                technical.push(m.as_str());
            }
        }
    }

    let total_count = technical.items.len() + soft.items.len();

    SkillSet {
        technical: technical.items,
        soft: soft.items,
        total_count,
    }
}
