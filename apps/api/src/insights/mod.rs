// Model-written resume insights: summary, skill gaps, roadmap, and job-search keywords.
// All LLM calls go through llm_client.

pub mod generator;
pub mod prompts;

pub use generator::{generate_insights, suggest_search_keywords, ResumeInsights};
