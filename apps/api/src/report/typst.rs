//! Typst source for the analysis report.
//!
//! Every piece of user or model text is emitted as a Typst string literal
//! (`#"..."`) rather than markup, so characters like `*`, `#`, `$`, `//` or
//! `@` in a resume can never change the document structure.

use std::fmt::Write;

use crate::jobs::truncate_chars;
use crate::report::AnalysisReport;

const SUMMARY_CHARS: usize = 500;
const ANALYSIS_CHARS: usize = 600;
const MAX_TECHNICAL: usize = 15;
const MAX_SOFT: usize = 10;

const GREEN: &str = "#198754";
const AMBER: &str = "#ffc107";
const RED: &str = "#dc3545";

pub const KEY_RECOMMENDATIONS: [&str; 6] = [
    "Update your resume with quantifiable achievements",
    "Include action verbs in experience descriptions",
    "Add relevant certifications to boost credibility",
    "Tailor your resume for each job application",
    "Keep your LinkedIn profile synchronized with resume",
    "Practice mock interviews for targeted roles",
];

/// Escapes `text` as a Typst string literal, quotes included.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Colour for an overall ATS score.
pub fn score_color(score: u32) -> &'static str {
    if score >= 80 {
        GREEN
    } else if score >= 60 {
        AMBER
    } else {
        RED
    }
}

/// "contact_info" → "Contact Info"
fn category_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn text(value: &str) -> String {
    format!("#{}", string_literal(value))
}

pub fn render_source(report: &AnalysisReport) -> String {
    let mut doc = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut doc, report);
    doc
}

fn write_document(doc: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(doc, "#set document(title: \"Resume Analysis Report\")")?;
    writeln!(doc, "#set page(paper: \"a4\", margin: 2cm, numbering: \"1\")")?;
    writeln!(doc, "#set text(size: 11pt)")?;
    writeln!(doc, "#show heading: set text(fill: rgb(\"#0d6efd\"))")?;
    writeln!(doc)?;

    // ── Header ──────────────────────────────────────────────────────────────
    writeln!(doc, "#align(center)[")?;
    writeln!(
        doc,
        "  #text(size: 16pt, weight: \"bold\")[Resume Analysis Report] \\"
    )?;
    writeln!(
        doc,
        "  #text(size: 10pt, style: \"italic\", fill: gray)[Generated on {}]",
        text(&report.generated_at.format("%B %d, %Y").to_string())
    )?;
    writeln!(doc, "]")?;
    writeln!(doc)?;

    if let Some(title) = &report.target_title {
        writeln!(doc, "*Target role:* {}", text(title))?;
        writeln!(doc)?;
    }

    // ── ATS score ───────────────────────────────────────────────────────────
    let ats = &report.ats;
    writeln!(doc, "== ATS Compatibility Score")?;
    writeln!(
        doc,
        "*Overall Score:* #text(size: 14pt, weight: \"bold\", fill: rgb(\"{}\"))[{}/{}]",
        score_color(ats.total_score),
        ats.total_score,
        ats.max_score
    )?;
    writeln!(doc)?;
    writeln!(doc, "*Grade:* {}", text(ats.grade.as_str()))?;
    writeln!(doc)?;
    writeln!(doc, "#table(")?;
    writeln!(doc, "  columns: (1fr, auto),")?;
    writeln!(doc, "  stroke: none,")?;
    writeln!(doc, "  [*Category*], [*Points*],")?;
    for (key, points, cap) in ats.breakdown.entries() {
        writeln!(
            doc,
            "  [{}], [{points} / {cap}],",
            text(&category_label(key))
        )?;
    }
    writeln!(doc, ")")?;
    writeln!(doc)?;

    // ── Summary ─────────────────────────────────────────────────────────────
    if let Some(insights) = &report.insights {
        writeln!(doc, "== Resume Summary")?;
        writeln!(doc, "{}", text(&truncate_chars(&insights.summary, SUMMARY_CHARS)))?;
        writeln!(doc)?;
    }

    // ── Skills ──────────────────────────────────────────────────────────────
    let skills = &report.skills;
    writeln!(doc, "== Identified Skills")?;
    if !skills.technical.is_empty() {
        let list = skills
            .technical
            .iter()
            .take(MAX_TECHNICAL)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(doc, "*Technical Skills:* {}", text(&list))?;
        writeln!(doc)?;
    }
    if !skills.soft.is_empty() {
        let list = skills
            .soft
            .iter()
            .take(MAX_SOFT)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(doc, "*Soft Skills:* {}", text(&list))?;
        writeln!(doc)?;
    }
    writeln!(
        doc,
        "#text(style: \"italic\", fill: gray)[Total Skills Identified: {}]",
        skills.total_count
    )?;
    writeln!(doc)?;

    // ── Gaps and roadmap ────────────────────────────────────────────────────
    if let Some(insights) = &report.insights {
        writeln!(doc, "== Skill Gaps & Areas for Improvement")?;
        writeln!(
            doc,
            "{}",
            text(&truncate_chars(&insights.skill_gaps, ANALYSIS_CHARS))
        )?;
        writeln!(doc)?;
        writeln!(doc, "== Career Roadmap")?;
        writeln!(
            doc,
            "{}",
            text(&truncate_chars(&insights.roadmap, ANALYSIS_CHARS))
        )?;
        writeln!(doc)?;
    }

    if let Some(salary) = &report.salary {
        writeln!(doc, "== Salary Estimate")?;
        writeln!(
            doc,
            "{} to {} (average {}, {})",
            text(&salary.min),
            text(&salary.max),
            text(&salary.avg),
            text(&salary.currency)
        )?;
        writeln!(doc)?;
    }

    // ── Tips and recommendations ────────────────────────────────────────────
    writeln!(doc, "#pagebreak()")?;
    writeln!(doc, "== Interview Preparation Tips")?;
    for tip in &report.interview_tips {
        writeln!(doc, "- {}", text(tip))?;
    }
    writeln!(doc)?;
    writeln!(doc, "== Key Recommendations")?;
    for recommendation in KEY_RECOMMENDATIONS {
        writeln!(doc, "- {}", text(recommendation))?;
    }

    Ok(())
}
