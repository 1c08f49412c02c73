//! Analysis report: every deterministic score for one resume plus the
//! model-written insights, in a shape that can be returned as JSON or
//! rendered to PDF.

pub mod handlers;
pub mod renderer;
pub mod typst;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{
    calculate_ats_score, estimate_salary_range, extract_skills, generate_interview_tips,
    AtsResult, SalaryBand, SkillSet, DEFAULT_LOCATION,
};
use crate::insights::ResumeInsights;
use crate::resume::word_count;

pub use renderer::ReportRenderer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub word_count: usize,
    pub ats: AtsResult,
    pub skills: SkillSet,
    #[serde(default)]
    pub insights: Option<ResumeInsights>,
    #[serde(default)]
    pub target_title: Option<String>,
    /// Present only when a target title was given.
    #[serde(default)]
    pub salary: Option<SalaryBand>,
    #[serde(default)]
    pub interview_tips: Vec<String>,
}

/// Assembles a report for `text`.
///
/// Model output, when present, is folded into skill extraction so that
/// capitalized technologies the model mentions are picked up too. Tips use
/// the technical skills only.
pub fn build_report(
    text: &str,
    insights: Option<ResumeInsights>,
    target_title: Option<String>,
) -> AnalysisReport {
    let ai_text = insights
        .as_ref()
        .map(|i| format!("{}\n{}", i.summary, i.skill_gaps));
    let skills = extract_skills(text, ai_text.as_deref());

    let title = target_title.as_deref().unwrap_or_default();
    let salary = target_title
        .as_deref()
        .map(|t| estimate_salary_range(t, DEFAULT_LOCATION));
    let interview_tips = generate_interview_tips(title, &skills.technical);

    AnalysisReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        word_count: word_count(text),
        ats: calculate_ats_score(text),
        skills,
        insights,
        target_title,
        salary,
        interview_tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::interview::PYTHON_TIP;

    const RESUME: &str = "Jane Doe\njane@example.com\n\nExperience\n\
        Developed data pipelines in python and sql, improving throughput by 40%.\n\n\
        Education\nB.Tech 2018 - 2022\n\nSkills\nleadership, communication";

    fn insights() -> ResumeInsights {
        ResumeInsights {
            summary: "Data engineer experienced with Apache Spark and Snowflake.".to_string(),
            skill_gaps: "Consider learning Kubernetes.".to_string(),
            roadmap: "Move towards platform engineering.".to_string(),
        }
    }

    #[test]
    fn test_report_without_title_has_no_salary() {
        let report = build_report(RESUME, None, None);
        assert!(report.salary.is_none());
        assert!(report.insights.is_none());
        assert_eq!(report.word_count, RESUME.split_whitespace().count());
        assert!(report.skills.technical.contains(&"python".to_string()));
        assert!(report.skills.soft.contains(&"leadership".to_string()));
    }

    #[test]
    fn test_insights_enrich_technical_skills() {
        let report = build_report(RESUME, Some(insights()), None);
        assert!(report
            .skills
            .technical
            .iter()
            .any(|s| s == "Apache Spark" || s == "Snowflake"));
        assert!(report
            .skills
            .technical
            .iter()
            .any(|s| s == "Kubernetes"));
    }

    #[test]
    fn test_target_title_drives_salary_and_tips() {
        let report = build_report(RESUME, None, Some("Data Scientist".to_string()));
        let salary = report.salary.unwrap();
        assert!(salary.min.ends_with("LPA"));
        assert!(report.interview_tips.len() <= 8);
        assert!(report.interview_tips.iter().any(|t| t == PYTHON_TIP));
    }

    #[test]
    fn test_ats_matches_direct_scoring() {
        let report = build_report(RESUME, None, None);
        assert_eq!(report.ats, calculate_ats_score(RESUME));
    }

    #[test]
    fn test_report_json_roundtrip_preserves_fields() {
        let report = build_report(RESUME, Some(insights()), Some("Backend Developer".into()));
        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
