//! Interview Tip Generator: universal tips, one role bundle, and a couple of
//! skill-triggered extras, capped at eight.

const MAX_TIPS: usize = 8;

const UNIVERSAL_TIPS: [&str; 3] = [
    "Review the STAR method (Situation, Task, Action, Result) for behavioral questions",
    "Prepare examples of your past projects and achievements",
    "Practice explaining complex technical concepts in simple terms",
];

/// Role bundles, tested in order against the lowercased title. The first
/// bundle with any matching keyword is used; the last one is the fallback.
const ROLE_TIPS: &[(&[&str], [&str; 3])] = &[
    (
        &["data", "ml", "ai"],
        [
            "Be ready to discuss your data analysis projects and methodologies",
            "Brush up on statistics, probability, and machine learning algorithms",
            "Practice SQL queries and data manipulation problems",
        ],
    ),
    (
        &["frontend", "react", "ui"],
        [
            "Prepare your portfolio of UI/UX projects",
            "Review React/Vue/Angular lifecycle and hooks",
            "Discuss responsive design and browser compatibility",
        ],
    ),
    (
        &["backend", "api"],
        [
            "Review RESTful API design principles",
            "Discuss database design and optimization",
            "Understand authentication, authorization, and security best practices",
        ],
    ),
    (
        &["devops", "sre"],
        [
            "Review CI/CD pipeline concepts",
            "Discuss containerization and orchestration (Docker, Kubernetes)",
            "Understand monitoring, logging, and alerting strategies",
        ],
    ),
    (
        &["full stack"],
        [
            "Be prepared for both frontend and backend questions",
            "Discuss your experience with the complete project lifecycle",
            "Review system design fundamentals",
        ],
    ),
];

const GENERAL_TIPS: [&str; 3] = [
    "Research the company's products and recent news",
    "Prepare thoughtful questions to ask the interviewer",
    "Highlight projects relevant to the job description",
];

pub const PYTHON_TIP: &str = "Review Python data structures and common libraries";
pub const CLOUD_TIP: &str = "Discuss your cloud architecture experience and cost optimization";

const CLOUD_SKILLS: [&str; 3] = ["aws", "azure", "gcp"];

/// Builds interview preparation tips for `title`. Skill triggers compare whole
/// skill names case-insensitively, not substrings.
pub fn generate_interview_tips(title: &str, skills: &[String]) -> Vec<String> {
    let title_lower = title.to_lowercase();
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let role_tips = ROLE_TIPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title_lower.contains(k)))
        .map(|(_, tips)| tips)
        .unwrap_or(&GENERAL_TIPS);

    let mut tips: Vec<String> = UNIVERSAL_TIPS
        .iter()
        .chain(role_tips.iter())
        .map(|t| t.to_string())
        .collect();

    if skills_lower.iter().any(|s| s == "python") {
        tips.push(PYTHON_TIP.to_string());
    }
    if skills_lower
        .iter()
        .any(|s| CLOUD_SKILLS.contains(&s.as_str()))
    {
        tips.push(CLOUD_TIP.to_string());
    }

    tips.truncate(MAX_TIPS);
    tips
}
