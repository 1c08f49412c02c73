// Prompt templates for the insights generator.
// Each template carries a `{resume_text}` or `{summary}` placeholder replaced before sending.

pub const SUMMARY_MAX_TOKENS: u32 = 500;
pub const SKILL_GAPS_MAX_TOKENS: u32 = 400;
pub const ROADMAP_MAX_TOKENS: u32 = 400;
pub const KEYWORDS_MAX_TOKENS: u32 = 100;

/// Replace `{resume_text}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "Summarize this resume highlighting the skills, \
education, and experience:

{resume_text}";

/// Replace `{resume_text}` before sending.
pub const SKILL_GAPS_PROMPT_TEMPLATE: &str = "Analyze this resume and highlight missing skills, \
certifications, and experiences needed for better job opportunities:

{resume_text}";

/// Replace `{resume_text}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = "Based on this resume, suggest a future roadmap to \
improve this person's career prospects (skills to learn, certifications needed, industry exposure):

{resume_text}";

/// Replace `{summary}` before sending.
pub const KEYWORDS_PROMPT_TEMPLATE: &str = "Based on this resume summary, suggest the best job \
titles and keywords for searching jobs. Give a comma-separated list only, no explanation.

Summary: {summary}";
